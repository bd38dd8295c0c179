/*!
 * Tabular store abstraction.
 *
 * The pipeline itself only ever sees ordered rows; where those rows live is
 * a store concern. This module defines the row/column data model, the
 * `TabularStore` trait, and two implementations:
 *
 * - `memory`: In-memory grid, used in tests and as the reference store
 * - `csv`: File-backed store over CSV files
 */

use anyhow::{Result, anyhow};
use async_trait::async_trait;

pub mod csv;
pub mod memory;

pub use self::csv::CsvStore;
pub use self::memory::MemoryStore;

/// One record of cell values.
///
/// In the translation pipeline every row carries exactly one text cell, but
/// the container supports multi-cell rows uniformly so a store can hand over
/// wider ranges unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<String>,
}

impl Row {
    /// Create a row from a list of cell values
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Create a single-cell row
    pub fn single(text: impl Into<String>) -> Self {
        Self { cells: vec![text.into()] }
    }

    /// Total character count over all cells, the unit the per-request
    /// character limit is measured in
    pub fn char_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.chars().count()).sum()
    }

    /// Iterate over the cell texts in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(String::as_str)
    }
}

/// An ordered sequence of rows, index-aligned with its source range.
/// Position is the only correlation key, so ordering must be preserved
/// end-to-end.
pub type Column = Vec<Row>;

/// Descriptor for one column slice of a store.
///
/// `start_row` is the zero-based offset of the first data row; header rows
/// are excluded by starting below them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRange {
    /// Zero-based column index
    pub column: usize,
    /// Zero-based index of the first row to include
    pub start_row: usize,
}

impl ColumnRange {
    /// Create a range starting at the first data row
    pub fn new(column: usize) -> Self {
        Self { column, start_row: 0 }
    }

    /// Create a range starting at the given row offset
    pub fn starting_at(column: usize, start_row: usize) -> Self {
        Self { column, start_row }
    }
}

/// Read/write interface over a rectangular range of cells.
///
/// Both operations are row-order-preserving. Whether a write replaces a
/// whole sheet or diffs into an existing one is up to the implementation;
/// the pipeline only requires that a write is all-or-nothing.
#[async_trait]
pub trait TabularStore: Send + Sync {
    /// Read one column as an ordered list of single-cell rows
    async fn read_column(&self, range: &ColumnRange) -> Result<Column>;

    /// Write an ordered list of rows back to the given column.
    /// The row count must match what `read_column` returned for the range.
    async fn write_column(&self, range: &ColumnRange, rows: &[Row]) -> Result<()>;
}

/// Parse a spreadsheet-style column letter ("A", "H", "AA") into a
/// zero-based column index.
pub fn column_index(letter: &str) -> Result<usize> {
    if letter.is_empty() {
        return Err(anyhow!("column selector cannot be empty"));
    }

    let mut index: usize = 0;
    for ch in letter.chars() {
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(anyhow!("invalid column selector: {}", letter));
        }
        index = index
            .checked_mul(26)
            .and_then(|i| i.checked_add(upper as usize - 'A' as usize + 1))
            .ok_or_else(|| anyhow!("column selector out of range: {}", letter))?;
    }

    Ok(index - 1)
}
