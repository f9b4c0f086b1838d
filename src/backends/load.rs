//! Dataset loader - CSV into [`Table`]
//!
//! Decoding and tokenizing are delegated to `encoding_rs` and the `csv`
//! crate. Everything that goes wrong is surfaced as a [`LoaderError`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::encoding::{self, DEFAULT_ENCODING};
use crate::core::error::LoaderError;
use crate::core::table::{Cell, Table};

/// Default column promoted to the row index
pub const DEFAULT_INDEX_COL: &str = "email_id";

/// Loader configuration
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Encoding label, e.g. `latin-1` or `utf-8`
    pub encoding: String,

    /// Column to promote to the index, if present
    pub index_col: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            index_col: Some(DEFAULT_INDEX_COL.to_string()),
        }
    }
}

/// Load a CSV file into a table, promoting the index column when it exists.
pub fn load_csv(path: &Path, options: &LoadOptions) -> Result<Table, LoaderError> {
    let bytes = fs::read(path)?;
    let text = encoding::decode(&bytes, &options.encoding)?;
    let mut table = parse_csv(&text)?;

    if let Some(index_col) = options.index_col.as_deref() {
        if table.set_index(index_col) {
            tracing::debug!(column = index_col, "promoted index column");
        } else {
            tracing::debug!(column = index_col, "index column absent, keeping positional index");
        }
    }

    Ok(table)
}

/// Parse decoded CSV text with a header row.
pub fn parse_csv(text: &str) -> Result<Table, LoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header = reader.headers()?.clone();
    if header.is_empty() || (header.len() == 1 && header[0].trim().is_empty()) {
        return Err(LoaderError::EmptyData);
    }

    let columns = dedupe_columns(header.iter());
    let width = columns.len();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;

        if record.len() > width {
            return Err(LoaderError::Tokenize {
                expected: width,
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                found: record.len(),
            });
        }

        let mut row: Vec<Cell> = record
            .iter()
            .map(|field| (!field.is_empty()).then(|| field.to_string()))
            .collect();
        row.resize(width, None);
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), columns = width, "parsed csv");
    Ok(Table::new(columns, rows))
}

/// Disambiguate repeated header names as `name.1`, `name.2`, ...
fn dedupe_columns<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut columns: Vec<String> = Vec::new();

    for name in names {
        let mut candidate = name.to_string();
        while let Some(count) = seen.get_mut(&candidate) {
            *count += 1;
            candidate = format!("{}.{}", name, count);
        }
        seen.insert(candidate.clone(), 0);
        columns.push(candidate);
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cell(s: &str) -> Cell {
        Some(s.to_string())
    }

    #[test]
    fn test_parse_basic() {
        let table = parse_csv("a,b\n1,2\n3,4\n").unwrap();
        assert_eq!(table.shape(), (2, 2));
        assert_eq!(table.columns(), &["a".to_string(), "b".to_string()]);
        assert_eq!(table.rows()[1], vec![cell("3"), cell("4")]);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let table = parse_csv("subject,body\n\"Re: hi, there\",\"line1\nline2\"\n").unwrap();
        assert_eq!(table.shape(), (1, 2));
        assert_eq!(table.rows()[0][0], cell("Re: hi, there"));
        assert_eq!(table.rows()[0][1], cell("line1\nline2"));
    }

    #[test]
    fn test_parse_short_rows_padded() {
        let table = parse_csv("a,b,c\n1\n4,,6\n").unwrap();
        assert_eq!(table.rows()[0], vec![cell("1"), None, None]);
        assert_eq!(table.rows()[1], vec![cell("4"), None, cell("6")]);
    }

    #[test]
    fn test_parse_long_row_fails() {
        let err = parse_csv("a,b\n1,2\n3,4,5\n").unwrap_err();
        match err {
            LoaderError::Tokenize {
                expected, found, ..
            } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_quoted_empty_row_kept() {
        let table = parse_csv("a\n1\n\"\"\n2\n").unwrap();
        assert_eq!(table.shape(), (3, 1));
        assert_eq!(table.rows()[1], vec![None]);
    }

    #[test]
    fn test_parse_blank_lines_skipped() {
        let table = parse_csv("a,b\n1,2\n\n3,4\n").unwrap();
        assert_eq!(table.shape(), (2, 2));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_csv(""), Err(LoaderError::EmptyData)));
    }

    #[test]
    fn test_parse_header_only() {
        let table = parse_csv("a,b\n").unwrap();
        assert_eq!(table.shape(), (0, 2));
    }

    #[test]
    fn test_dedupe_columns() {
        let cols = dedupe_columns(["a", "b", "a", "a", "a.1"].into_iter());
        assert_eq!(cols, vec!["a", "b", "a.1", "a.2", "a.1.1"]);
    }

    #[test]
    fn test_load_sets_index_when_present() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("emails.csv");
        fs::write(&path, "email_id,subject\nm1,hello\nm2,bye\n").unwrap();

        let table = load_csv(&path, &LoadOptions::default()).unwrap();
        let index = table.index().unwrap();
        assert_eq!(index.name, "email_id");
        assert_eq!(index.labels, vec![cell("m1"), cell("m2")]);
        assert_eq!(table.shape(), (2, 1));
    }

    #[test]
    fn test_load_without_index() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("emails.csv");
        fs::write(&path, "email_id,subject\nm1,hello\n").unwrap();

        let options = LoadOptions {
            index_col: None,
            ..LoadOptions::default()
        };
        let table = load_csv(&path, &options).unwrap();
        assert!(table.index().is_none());
        assert_eq!(table.shape(), (1, 2));
    }

    #[test]
    fn test_load_absent_index_column_is_silent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("emails.csv");
        fs::write(&path, "id,subject\n1,hello\n").unwrap();

        let table = load_csv(&path, &LoadOptions::default()).unwrap();
        assert!(table.index().is_none());
        assert_eq!(table.shape(), (1, 2));
    }

    #[test]
    fn test_load_latin1_bytes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("emails.csv");
        fs::write(&path, b"name\nJos\xe9\n").unwrap();

        let table = load_csv(&path, &LoadOptions::default()).unwrap();
        assert_eq!(table.rows()[0][0], cell("José"));
    }

    #[test]
    fn test_load_bad_encoding_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("emails.csv");
        fs::write(&path, b"name\nJos\xe9\n").unwrap();

        let options = LoadOptions {
            encoding: "utf-8".into(),
            ..LoadOptions::default()
        };
        let err = load_csv(&path, &options).unwrap_err();
        assert!(matches!(err, LoaderError::Encoding { .. }));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = tempdir().unwrap();
        let err = load_csv(&temp.path().join("nope.csv"), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
