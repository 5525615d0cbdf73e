//! Tabular text parser
//!
//! Splits CSV text into rows of fields. The scan is character by character
//! so that delimiters and line breaks inside quoted fields stay part of the
//! field value.
//!
//! # Rules
//!
//! - A field that starts with the quote character is quoted. Inside it a
//!   doubled quote is a literal quote, and delimiters and line breaks are
//!   ordinary content.
//! - Any other field is read literally up to the next delimiter or line
//!   terminator.
//! - `\n` and `\r\n` end a row. A lone `\r` is content.
//! - A terminator at the very end of the input does not start a new row.

use crate::config::ParserConfig;
use crate::error::{Error, Result};

/// One logical line of CSV input
pub type Row = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing consumed for the current field yet
    FieldStart,
    /// Inside an unquoted field
    Unquoted,
    /// Inside a quoted field
    InQuotes,
    /// Past the closing quote of a quoted field
    AfterQuotes,
}

/// Parse CSV text into rows.
///
/// Empty input yields no rows. A leading UTF-8 byte order mark is ignored.
///
/// # Errors
///
/// Returns [`Error::MalformedField`] if the input ends inside a quoted field.
pub fn parse(text: &str, config: &ParserConfig) -> Result<Vec<Row>> {
    // Offsets are reported against the original text, mark included
    let (text, mark_len) = match text.strip_prefix('\u{feff}') {
        Some(rest) => (rest, 1),
        None => (text, 0),
    };

    let mut rows = Vec::new();
    let mut row = Row::new();
    let mut field = String::new();
    let mut state = State::FieldStart;

    // Position of the most recent opening quote, reported if it never closes
    let mut open_quote = (0, 0);
    let mut line = 1;

    let mut chars = text.chars().enumerate().peekable();
    while let Some((offset, c)) = chars.next() {
        if state == State::InQuotes {
            if c == config.quote {
                if chars.next_if(|&(_, next)| next == config.quote).is_some() {
                    field.push(c);
                } else {
                    state = State::AfterQuotes;
                }
            } else {
                if c == '\n' {
                    line += 1;
                }
                field.push(c);
            }
            continue;
        }

        if c == config.delimiter {
            row.push(std::mem::take(&mut field));
            state = State::FieldStart;
        } else if c == '\n' || (c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some()) {
            row.push(std::mem::take(&mut field));
            rows.push(std::mem::take(&mut row));
            state = State::FieldStart;
            line += 1;
        } else if state == State::FieldStart && c == config.quote {
            open_quote = (line, offset + mark_len);
            state = State::InQuotes;
        } else {
            field.push(c);
            if state == State::FieldStart {
                state = State::Unquoted;
            }
        }
    }

    if state == State::InQuotes {
        let (line, offset) = open_quote;
        return Err(Error::MalformedField { line, offset });
    }

    // Input that did not end on a terminator still has a row in progress
    if state != State::FieldStart || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    tracing::debug!("Parsed {} rows", rows.len());
    Ok(rows)
}
