//! In-memory table model
//!
//! A table holds named columns, zero or more rows of text cells, and an
//! optional index that replaces the default positional row labels.

use serde::{Deserialize, Serialize};

/// A single cell; `None` marks a missing value
pub type Cell = Option<String>;

/// Row labels promoted from a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Name of the column the labels came from
    pub name: String,

    /// One label per row, duplicates allowed
    pub labels: Vec<Cell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    index: Option<Index>,
}

impl Table {
    /// Build a table from a header and rows of equal width
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self {
            columns,
            rows,
            index: None,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn index(&self) -> Option<&Index> {
        self.index.as_ref()
    }

    /// (rows, columns), not counting the index
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Promote a column to the row index.
    ///
    /// Returns `false` and leaves the table untouched when no column has that
    /// exact name.
    pub fn set_index(&mut self, name: &str) -> bool {
        let Some(pos) = self.column_position(name) else {
            return false;
        };

        let column = self.columns.remove(pos);
        let labels = self.rows.iter_mut().map(|row| row.remove(pos)).collect();
        self.index = Some(Index {
            name: column,
            labels,
        });
        true
    }

    /// Row label at `row`: the index value if set, otherwise the position
    pub fn row_label(&self, row: usize) -> String {
        match &self.index {
            Some(index) => index
                .labels
                .get(row)
                .and_then(|l| l.clone())
                .unwrap_or_else(|| MISSING.to_string()),
            None => row.to_string(),
        }
    }

    /// Copy of the first `n` rows (with their index labels)
    pub fn head(&self, n: usize) -> Table {
        let n = n.min(self.rows.len());
        Table {
            columns: self.columns.clone(),
            rows: self.rows[..n].to_vec(),
            index: self.index.as_ref().map(|index| Index {
                name: index.name.clone(),
                labels: index.labels[..n].to_vec(),
            }),
        }
    }
}

/// Display text for a missing cell
pub const MISSING: &str = "NaN";

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Cell {
        Some(s.to_string())
    }

    fn sample() -> Table {
        Table::new(
            vec!["email_id".into(), "subject".into(), "size".into()],
            vec![
                vec![cell("e1"), cell("hello"), cell("10")],
                vec![cell("e2"), None, cell("20")],
                vec![cell("e1"), cell("again"), cell("30")],
            ],
        )
    }

    #[test]
    fn test_shape() {
        assert_eq!(sample().shape(), (3, 3));
        assert_eq!(Table::default().shape(), (0, 0));
    }

    #[test]
    fn test_set_index_moves_column() {
        let mut table = sample();
        assert!(table.set_index("email_id"));

        assert_eq!(table.shape(), (3, 2));
        assert_eq!(table.columns(), &["subject".to_string(), "size".to_string()]);

        let index = table.index().unwrap();
        assert_eq!(index.name, "email_id");
        assert_eq!(index.labels, vec![cell("e1"), cell("e2"), cell("e1")]);
        assert_eq!(table.rows()[1], vec![None, cell("20")]);
    }

    #[test]
    fn test_set_index_missing_column_is_noop() {
        let mut table = sample();
        let before = table.clone();
        assert!(!table.set_index("message_id"));
        assert_eq!(table, before);
        assert!(table.index().is_none());
    }

    #[test]
    fn test_set_index_is_case_sensitive() {
        let mut table = sample();
        assert!(!table.set_index("Email_ID"));
    }

    #[test]
    fn test_row_labels() {
        let mut table = sample();
        assert_eq!(table.row_label(2), "2");
        table.set_index("email_id");
        assert_eq!(table.row_label(2), "e1");
    }

    #[test]
    fn test_head_truncates_rows_and_labels() {
        let mut table = sample();
        table.set_index("email_id");

        let head = table.head(2);
        assert_eq!(head.shape(), (2, 2));
        assert_eq!(head.index().unwrap().labels.len(), 2);

        assert_eq!(table.head(10).shape(), (3, 2));
        assert_eq!(table.head(0).shape(), (0, 2));
    }
}
