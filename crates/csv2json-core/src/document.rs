//! Records and documents
//!
//! A [`Record`] is one data row keyed by the header; a [`Document`] is the
//! ordered list of records produced by one conversion.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::OutputConfig;
use crate::error::Result;

/// A column name to value mapping for one data row.
///
/// Keys keep header order. All values are JSON strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), Value::String(value.into()));
    }

    /// Look up a field value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Column names in header order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The ordered sequence of records from one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    /// Wrap a list of records
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The records in input order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the document has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize as a JSON array of objects
    pub fn to_json(&self, output: &OutputConfig) -> Result<String> {
        let json = if output.pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl IntoIterator for Document {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
