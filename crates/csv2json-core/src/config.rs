//! Configuration parsing and validation
//!
//! Conversion options can come from an optional YAML file and are then
//! overridden field by field by the caller (usually the CLI).
//!
//! # Configuration File
//!
//! ```yaml
//! parser:
//!   delimiter: ";"
//!   quote: "'"
//! output:
//!   pretty: true
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Tabular parser settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParserConfig {
    /// Field separator
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Quote character used to enclose fields
    #[serde(default = "default_quote")]
    pub quote: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            quote: default_quote(),
        }
    }
}

fn default_delimiter() -> char {
    ','
}

fn default_quote() -> char {
    '"'
}

impl ParserConfig {
    /// Check that the delimiter and quote can be told apart from each other
    /// and from line terminators.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == self.quote {
            return Err(Error::ConfigInvalid {
                message: format!(
                    "delimiter and quote must differ (both are {:?})",
                    self.delimiter
                ),
            });
        }
        for (name, c) in [("delimiter", self.delimiter), ("quote", self.quote)] {
            if c == '\n' || c == '\r' {
                return Err(Error::ConfigInvalid {
                    message: format!("{} cannot be a line terminator", name),
                });
            }
        }
        Ok(())
    }
}

/// JSON output settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Indent the output with two spaces per level
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

/// Options for a single conversion run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Options {
    /// Parser settings
    #[serde(default)]
    pub parser: ParserConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Options {
    /// Load options from a YAML file
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let options = Options::load("csv2json.yaml")?;
    /// println!("Delimiter: {:?}", options.parser.delimiter);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_yaml(&contents)?;

        tracing::debug!("Loaded options from {}: {:?}", path.display(), options);
        Ok(options)
    }

    /// Parse options from YAML text and validate them
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to null rather than an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Validate all option groups
    pub fn validate(&self) -> Result<()> {
        self.parser.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.parser.delimiter, ',');
        assert_eq!(options.parser.quote, '"');
        assert!(options.output.pretty);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
parser:
  delimiter: ";"
  quote: "'"
output:
  pretty: false
"#;
        let options = Options::from_yaml(yaml).unwrap();
        assert_eq!(options.parser.delimiter, ';');
        assert_eq!(options.parser.quote, '\'');
        assert!(!options.output.pretty);
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
parser:
  delimiter: "\t"
"#;
        let options = Options::from_yaml(yaml).unwrap();
        assert_eq!(options.parser.delimiter, '\t');
        assert_eq!(options.parser.quote, '"');
        assert!(options.output.pretty);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Options::from_yaml("").unwrap(), Options::default());
    }

    #[test]
    fn test_multi_char_delimiter_rejected() {
        let yaml = "parser:\n  delimiter: \"::\"\n";
        assert!(matches!(
            Options::from_yaml(yaml),
            Err(Error::ConfigParse(_))
        ));
    }

    #[rstest]
    #[case(',', ',')]
    #[case('\n', '"')]
    #[case(',', '\r')]
    fn test_invalid_parser_config(#[case] delimiter: char, #[case] quote: char) {
        let config = ParserConfig { delimiter, quote };
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Options::load(dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("csv2json.yaml");
        std::fs::write(&path, "parser:\n  delimiter: \"|\"\n").unwrap();

        let options = Options::load(&path).unwrap();
        assert_eq!(options.parser.delimiter, '|');
    }

    #[test]
    fn test_load_directory_is_config_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = Options::load(dir.path()).unwrap_err();
        match &err {
            Error::ConfigRead { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("Expected ConfigRead, got {:?}", other),
        }
        assert!(err.to_string().starts_with("failed to read configuration"));
    }
}
