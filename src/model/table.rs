//! Table block types.

use serde::{Deserialize, Serialize};

/// A grid of cells reconstructed from contiguous table-row units.
///
/// A table block always contains at least 2 rows: a single isolated
/// table row is indistinguishable from an aligned sentence and is
/// downgraded to a body unit before a block is ever built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableBlock {
    /// Rows in reading order, each an ordered sequence of cell strings
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    /// Create a table block from rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.len() >= 2, "a table block needs at least 2 rows");
        Self { rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (based on the widest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    /// The first row, treated as the header by renderers.
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Rows after the header.
    pub fn body(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    /// Plain text representation, one row per line, cells tab-separated.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
