//! Renderer module
//!
//! Renders a loaded table into the human-readable summary: shape, column list
//! and an aligned preview of the first rows.

use std::io::Write;

use crate::core::table::{Table, MISSING};

/// Default number of preview rows
pub const DEFAULT_HEAD: i64 = 5;

/// Render configuration
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Rows to preview; 0 disables the preview section, a negative value
    /// previews all rows but the last `|head|`
    pub head: i64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { head: DEFAULT_HEAD }
    }
}

impl RenderConfig {
    pub fn with_head(head: i64) -> Self {
        Self { head }
    }

    /// Number of rows the preview covers for a table of `total` rows
    pub fn preview_len(&self, total: usize) -> usize {
        let n = usize::try_from(self.head.unsigned_abs()).unwrap_or(usize::MAX);
        if self.head >= 0 {
            n.min(total)
        } else {
            total.saturating_sub(n)
        }
    }
}

/// Renderer for table summaries
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the full summary to a string
    pub fn render(&self, table: &Table) -> String {
        let mut output = String::new();

        output.push_str("\nTable loaded successfully.\n");
        output.push_str(&format!("Shape: {}\n", render_shape(table)));
        output.push_str(&format!("\nColumns: {}\n", render_columns(table.columns())));

        if self.config.head != 0 {
            let rows = self.config.preview_len(table.rows().len());
            output.push_str("\nShowing top rows:\n");
            output.push_str(&render_preview(&table.head(rows)));
            output.push('\n');
        }

        output
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, table: &Table, mut writer: W) -> std::io::Result<()> {
        let output = self.render(table);
        writer.write_all(output.as_bytes())
    }
}

/// `(rows, columns)`
pub fn render_shape(table: &Table) -> String {
    let (rows, cols) = table.shape();
    format!("({}, {})", rows, cols)
}

/// Column names as a bracketed, quoted list: `['a', 'b']`
pub fn render_columns(columns: &[String]) -> String {
    let quoted: Vec<String> = columns.iter().map(|c| quote(c)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote(s: &str) -> String {
    if s.contains('\'') && !s.contains('"') {
        format!("\"{}\"", s)
    } else {
        format!("'{}'", s.replace('\'', "\\'"))
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

/// Render rows as an aligned text grid.
///
/// Row labels are left-aligned in the first column, cells right-aligned
/// under their headers. A named index gets its own header line.
pub fn render_preview(table: &Table) -> String {
    if table.rows().is_empty() {
        return format!(
            "Empty table\nColumns: {}\nIndex: []",
            render_columns(table.columns())
        );
    }

    let labels: Vec<String> = (0..table.rows().len())
        .map(|i| table.row_label(i))
        .collect();
    let index_name = table.index().map(|i| i.name.as_str());

    let label_width = labels
        .iter()
        .map(|l| width(l))
        .chain(index_name.map(width))
        .max()
        .unwrap_or(0);

    let cells: Vec<Vec<&str>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(|c| c.as_deref().unwrap_or(MISSING)).collect())
        .collect();

    let col_widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .map(|row| width(row[i]))
                .chain(std::iter::once(width(name)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(cells.len() + 2);

    let mut header = " ".repeat(label_width);
    for (name, w) in table.columns().iter().zip(&col_widths) {
        header.push_str(&format!("  {:>w$}", name, w = *w));
    }
    lines.push(header.trim_end().to_string());

    if let Some(name) = index_name {
        lines.push(name.to_string());
    }

    for (label, row) in labels.iter().zip(&cells) {
        let mut line = format!("{:<w$}", label, w = label_width);
        for (cell, w) in row.iter().zip(&col_widths) {
            line.push_str(&format!("  {:>w$}", cell, w = *w));
        }
        lines.push(line);
    }

    lines.join("\n")
}
