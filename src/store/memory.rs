/*!
 * In-memory tabular store.
 *
 * Reference implementation of `TabularStore`, backed by a plain grid of
 * strings. Used throughout the test suite and handy for callers that
 * already hold their table in memory.
 */

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Mutex;

use super::{Column, ColumnRange, Row, TabularStore};

/// Tabular store backed by an in-memory grid of cells
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Rows of cells, outer index is the row position
    grid: Mutex<Vec<Vec<String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with the given grid
    pub fn with_grid(grid: Vec<Vec<String>>) -> Self {
        Self { grid: Mutex::new(grid) }
    }

    /// Snapshot of the full grid, mainly for assertions in tests
    pub fn snapshot(&self) -> Vec<Vec<String>> {
        self.grid.lock().unwrap().clone()
    }
}

#[async_trait]
impl TabularStore for MemoryStore {
    async fn read_column(&self, range: &ColumnRange) -> Result<Column> {
        let grid = self.grid.lock().unwrap();

        let mut column = Vec::new();
        for row in grid.iter().skip(range.start_row) {
            let cell = row
                .get(range.column)
                .ok_or_else(|| anyhow!("column {} out of bounds", range.column))?;
            column.push(Row::single(cell.clone()));
        }

        Ok(column)
    }

    async fn write_column(&self, range: &ColumnRange, rows: &[Row]) -> Result<()> {
        let mut grid = self.grid.lock().unwrap();

        let target_len = grid.len().saturating_sub(range.start_row);
        if rows.len() != target_len {
            return Err(anyhow!(
                "write of {} rows does not match column height {}",
                rows.len(),
                target_len
            ));
        }

        for (offset, row) in rows.iter().enumerate() {
            let text = row
                .cells
                .first()
                .ok_or_else(|| anyhow!("row {} has no cells", offset))?;
            let target = grid[range.start_row + offset]
                .get_mut(range.column)
                .ok_or_else(|| anyhow!("column {} out of bounds", range.column))?;
            *target = text.clone();
        }

        Ok(())
    }
}
