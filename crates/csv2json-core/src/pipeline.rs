//! Conversion pipeline
//!
//! Reads a CSV file, parses and maps it, and writes the JSON result. The
//! stages run strictly in order: read fully, parse, map, serialize, write.
//! Nothing is written unless every earlier stage succeeds, and the output
//! file is replaced atomically so a failed run never leaves partial JSON
//! behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{Options, ParserConfig};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::{mapper, parser};

const MISSING_PATHS: &str = "Please provide both input and output file paths.";

/// Input and output locations for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPaths {
    /// CSV file to read
    pub input: PathBuf,
    /// JSON file to write
    pub output: PathBuf,
}

impl ConversionPaths {
    /// Build paths from optional arguments.
    ///
    /// Fails with [`Error::Usage`] if either is missing or empty. No
    /// filesystem access happens here.
    pub fn resolve(input: Option<&str>, output: Option<&str>) -> Result<Self> {
        match (input, output) {
            (Some(input), Some(output)) if !input.is_empty() && !output.is_empty() => Ok(Self {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            }),
            _ => Err(Error::usage(MISSING_PATHS)),
        }
    }
}

/// Counts reported after a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of records written
    pub records: usize,
    /// Number of distinct columns per record
    pub columns: usize,
    /// Size of the JSON output in bytes
    pub bytes_written: usize,
}

/// Parse CSV text and map it to records
pub fn to_document(text: &str, config: &ParserConfig) -> Result<Document> {
    let rows = parser::parse(text, config)?;
    mapper::map_records(&rows)
}

/// Convert CSV text to JSON text without touching the filesystem
pub fn render(text: &str, options: &Options) -> Result<String> {
    to_document(text, &options.parser)?.to_json(&options.output)
}

/// Convert the CSV file at `input` into a JSON file at `output`.
///
/// # Errors
///
/// - [`Error::Usage`] if either path is empty, before any I/O
/// - [`Error::IoRead`] if the input cannot be read as UTF-8 text
/// - [`Error::MalformedField`] or [`Error::RowLengthMismatch`] from parsing
/// - [`Error::IoWrite`] if the output cannot be written
pub fn convert(input: &Path, output: &Path, options: &Options) -> Result<Summary> {
    require_paths(input, output)?;
    options.validate()?;

    tracing::debug!("Reading {}", input.display());
    let text = std::fs::read_to_string(input).map_err(|source| Error::IoRead {
        path: input.to_path_buf(),
        source,
    })?;

    let (json, summary) = build(&text, options)?;
    write_output(output, &json)?;

    log_summary(input, output, &summary);
    Ok(summary)
}

/// Async variant of [`convert`] using tokio file I/O.
///
/// The read is awaited; the atomic write runs on the blocking pool.
pub async fn convert_async(input: &Path, output: &Path, options: &Options) -> Result<Summary> {
    require_paths(input, output)?;
    options.validate()?;

    tracing::debug!("Reading {}", input.display());
    let text = tokio::fs::read_to_string(input)
        .await
        .map_err(|source| Error::IoRead {
            path: input.to_path_buf(),
            source,
        })?;

    let (json, summary) = build(&text, options)?;

    let target = output.to_path_buf();
    tokio::task::spawn_blocking(move || write_output(&target, &json))
        .await
        .map_err(|e| join_failed(output, e))??;

    log_summary(input, output, &summary);
    Ok(summary)
}

fn require_paths(input: &Path, output: &Path) -> Result<()> {
    if input.as_os_str().is_empty() || output.as_os_str().is_empty() {
        return Err(Error::usage(MISSING_PATHS));
    }
    Ok(())
}

fn build(text: &str, options: &Options) -> Result<(String, Summary)> {
    tracing::debug!("Input is {} bytes", text.len());

    let document = to_document(text, &options.parser)?;
    let json = document.to_json(&options.output)?;

    let summary = Summary {
        records: document.len(),
        columns: document.records().first().map_or(0, |r| r.len()),
        bytes_written: json.len(),
    };
    Ok((json, summary))
}

/// Write `contents` to a temporary file next to `path`, then rename it into
/// place.
fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: std::io::Error| Error::IoWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Keep the mode of a file being replaced; new files get the usual
    // umask-filtered default instead of the temp file's owner-only mode
    let existing = std::fs::metadata(path)
        .ok()
        .filter(|m| m.is_file())
        .map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    if existing.is_none()
        && let Some(permissions) = new_file_permissions()
    {
        builder.permissions(permissions);
    }

    let mut file = builder.tempfile_in(dir).map_err(write_err)?;
    if let Some(permissions) = existing {
        file.as_file()
            .set_permissions(permissions)
            .map_err(write_err)?;
    }
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(unix)]
fn new_file_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;

    // Applied at open time, so the process umask still filters it
    Some(std::fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<std::fs::Permissions> {
    None
}

fn join_failed(path: &Path, err: tokio::task::JoinError) -> Error {
    Error::IoWrite {
        path: path.to_path_buf(),
        source: std::io::Error::other(err),
    }
}

fn log_summary(input: &Path, output: &Path, summary: &Summary) {
    tracing::info!(
        "Converted {} records ({} columns) from {} to {}",
        summary.records,
        summary.columns,
        input.display(),
        output.display()
    );
}
