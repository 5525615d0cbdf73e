//! csv2json Core Library
//!
//! This crate converts comma-separated-value text into a JSON array of
//! string-valued records:
//! - Quote-aware CSV parsing
//! - Header-driven record mapping
//! - JSON serialization and atomic output
//! - YAML-backed conversion options
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV text   │────▶│   Parser    │────▶│   Mapper    │────▶│ JSON output │
//! │             │     │   (rows)    │     │  (records)  │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use csv2json_core::{Options, convert};
//!
//! let summary = convert("people.csv".as_ref(), "people.json".as_ref(), &Options::default())?;
//! println!("Wrote {} records", summary.records);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod error;
pub mod mapper;
pub mod parser;
pub mod pipeline;

pub use config::{Options, OutputConfig, ParserConfig};
pub use document::{Document, Record};
pub use error::{Error, Result};
pub use mapper::map_records;
pub use parser::{Row, parse};
pub use pipeline::{ConversionPaths, Summary, convert, convert_async, render, to_document};
