//! Convert a CSV file to JSON

use anyhow::{Context, Result};
use csv2json_core::{ConversionPaths, Options, convert_async};

/// Option values given on the command line
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    /// Field delimiter
    pub delimiter: Option<char>,
    /// Quote character
    pub quote: Option<char>,
    /// Emit compact JSON
    pub compact: bool,
}

impl Overrides {
    /// Apply command-line values on top of file or default options
    pub fn apply(&self, options: &mut Options) {
        if let Some(delimiter) = self.delimiter {
            options.parser.delimiter = delimiter;
        }
        if let Some(quote) = self.quote {
            options.parser.quote = quote;
        }
        if self.compact {
            options.output.pretty = false;
        }
    }
}

/// Run the convert command
pub async fn run(
    input: Option<&str>,
    output: Option<&str>,
    config_path: Option<&str>,
    overrides: &Overrides,
) -> Result<()> {
    // Checked before any file is touched, including the options file
    let paths = ConversionPaths::resolve(input, output)?;

    let mut options = match config_path {
        Some(path) => {
            tracing::info!("Loading options from {}", path);
            Options::load(path).context("Failed to load configuration")?
        }
        None => Options::default(),
    };
    overrides.apply(&mut options);
    options.validate().context("Invalid options")?;

    tracing::debug!("Options: {:?}", options);

    let summary = convert_async(&paths.input, &paths.output, &options)
        .await
        .with_context(|| format!("Failed to convert {}", paths.input.display()))?;

    tracing::info!(
        "✓ Wrote {} ({} bytes)",
        paths.output.display(),
        summary.bytes_written
    );
    Ok(())
}
