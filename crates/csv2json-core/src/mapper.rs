//! Record mapper
//!
//! Applies the header row to every data row.

use crate::document::{Document, Record};
use crate::error::{Error, Result};
use crate::parser::Row;

/// Turn parsed rows into records keyed by the first row.
///
/// No rows, or a header with no data rows, gives an empty document. When the
/// header repeats a column name the last value for that name wins.
///
/// # Errors
///
/// Returns [`Error::RowLengthMismatch`] for the first data row whose width
/// differs from the header. The whole conversion fails; no rows are skipped.
pub fn map_records(rows: &[Row]) -> Result<Document> {
    let Some((header, data)) = rows.split_first() else {
        return Ok(Document::default());
    };

    let mut records = Vec::with_capacity(data.len());
    for (index, row) in data.iter().enumerate() {
        if row.len() != header.len() {
            return Err(Error::RowLengthMismatch {
                row: index + 1,
                expected: header.len(),
                actual: row.len(),
            });
        }

        let mut record = Record::new();
        for (name, value) in header.iter().zip(row) {
            record.insert(name.as_str(), value.as_str());
        }
        records.push(record);
    }

    tracing::debug!(
        "Mapped {} records over {} columns",
        records.len(),
        header.len()
    );
    Ok(Document::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rows(data: Vec<Vec<&str>>) -> Vec<Row> {
        data.into_iter()
            .map(|r| r.into_iter().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_no_rows() {
        assert!(map_records(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_header_only() {
        assert!(map_records(&rows(vec![vec!["name", "age"]])).unwrap().is_empty());
    }

    #[test]
    fn test_maps_in_header_order() {
        let doc = map_records(&rows(vec![
            vec!["name", "age"],
            vec!["John", "30"],
            vec!["Jane", "25"],
        ]))
        .unwrap();

        assert_eq!(doc.len(), 2);
        for record in doc.records() {
            assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "age"]);
        }
        assert_eq!(doc.records()[0].get("name"), Some("John"));
        assert_eq!(doc.records()[1].get("age"), Some("25"));
    }

    #[test]
    fn test_empty_values_keep_keys() {
        let doc = map_records(&rows(vec![vec!["a", "b", "c"], vec!["", "x", ""]])).unwrap();
        let record = &doc.records()[0];
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("a"), Some(""));
        assert_eq!(record.get("c"), Some(""));
    }

    #[test]
    fn test_duplicate_header_last_write_wins() {
        let doc = map_records(&rows(vec![vec!["id", "name", "id"], vec!["1", "Ada", "2"]])).unwrap();
        let record = &doc.records()[0];
        assert_eq!(record.len(), 2);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "name"]);
        assert_eq!(record.get("id"), Some("2"));
    }

    #[rstest]
    #[case(vec![vec!["name", "age"], vec!["John", "30"], vec!["Jane"]], 2, 2, 1)]
    #[case(vec![vec!["name", "age"], vec!["John", "30", "extra"], vec!["Jane", "25"]], 1, 2, 3)]
    #[case(vec![vec!["only"], vec!["a"], vec!["b"], vec!["c", "d"]], 3, 1, 2)]
    fn test_row_length_mismatch_aborts(
        #[case] input: Vec<Vec<&str>>,
        #[case] expected_row: usize,
        #[case] expected_width: usize,
        #[case] actual_width: usize,
    ) {
        match map_records(&rows(input)) {
            Err(Error::RowLengthMismatch {
                row,
                expected,
                actual,
            }) => {
                assert_eq!(row, expected_row);
                assert_eq!(expected, expected_width);
                assert_eq!(actual, actual_width);
            }
            other => panic!("Expected RowLengthMismatch, got {:?}", other),
        }
    }
}
