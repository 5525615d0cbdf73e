//! Error types for csv2json-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for csv2json-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting CSV to JSON
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument (input or output path) was not supplied
    #[error("{message}")]
    Usage {
        /// Description of what is missing
        message: String,
    },

    /// Input file could not be read
    #[error("failed to read input {}: {source}", path.display())]
    IoRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// A quoted field was opened but never closed
    #[error("unterminated quoted field starting at line {line} (character offset {offset})")]
    MalformedField {
        /// 1-based line number of the opening quote
        line: usize,
        /// 0-based character offset of the opening quote, counting a
        /// leading byte order mark
        offset: usize,
    },

    /// A data row has a different number of fields than the header
    #[error("row {row} has {actual} fields, expected {expected}")]
    RowLengthMismatch {
        /// 1-based data row index, counting from the first row after the header
        row: usize,
        /// Header width
        expected: usize,
        /// Width of the offending row
        actual: usize,
    },

    /// Output file could not be written
    #[error("failed to write output {}: {source}", path.display())]
    IoWrite {
        /// Path that was written
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Configuration file exists but could not be read
    #[error("failed to read configuration {}: {source}", path.display())]
    ConfigRead {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Invalid configuration value
    #[error("invalid configuration: {message}")]
    ConfigInvalid {
        /// Description of what's invalid
        message: String,
    },
}

impl Error {
    /// Build a usage error from a message
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}
