/*!
 * Column chunking.
 *
 * Splits an ordered list of rows into maximal contiguous batches, each
 * bounded by an item-count cap and a total-character cap. Chunking is the
 * first pipeline stage and the only one that ever inspects row sizes.
 */

use log::debug;

use super::{MAX_CHARS_PER_REQUEST, MAX_TEXTS_PER_REQUEST};
use crate::errors::ChunkError;
use crate::store::Row;

/// A contiguous slice of a column, sized to fit in one service request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    rows: Vec<Row>,
    char_count: usize,
}

impl Batch {
    /// Rows in this batch, in column order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows in the batch
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the batch holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total character count over all rows
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// All cell texts of the batch, flattened in row order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flat_map(Row::texts)
    }

    /// Assemble a batch directly from rows, bypassing the chunker.
    ///
    /// The request builder re-validates batch size on its own, so a
    /// hand-built batch cannot smuggle an oversized request past it.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let char_count = rows.iter().map(Row::char_count).sum();
        Self { rows, char_count }
    }
}

/// Greedy, order-preserving batch splitter
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Maximum number of cell texts per batch, the unit one request carries
    max_items: usize,
    /// Maximum total character count per batch
    max_chars: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            max_items: MAX_TEXTS_PER_REQUEST,
            max_chars: MAX_CHARS_PER_REQUEST,
        }
    }
}

impl Chunker {
    /// Create a chunker with custom limits
    pub fn new(max_items: usize, max_chars: usize) -> Self {
        Self {
            max_items: max_items.max(1),
            max_chars: max_chars.max(1),
        }
    }

    /// Split rows into maximal batches respecting both limits.
    ///
    /// Walks the rows left to right and closes the current batch whenever
    /// adding the next row would exceed either cap. Batch boundaries are
    /// fully determined by the input; empty input yields no batches.
    ///
    /// A single row longer than the character cap fails immediately, before
    /// any request is built. Text is never truncated or split across
    /// requests.
    ///
    /// The item cap counts flattened cell texts, not rows, since every cell
    /// becomes one text parameter of the request. A single row carrying more
    /// cells than the cap cannot fit any batch and is rejected downstream by
    /// the request builder.
    pub fn chunk(&self, rows: &[Row]) -> Result<Vec<Batch>, ChunkError> {
        let mut batches = Vec::new();
        let mut current = Vec::new();
        let mut current_chars = 0;
        let mut current_texts = 0;

        for (row_index, row) in rows.iter().enumerate() {
            let row_chars = row.char_count();
            let row_texts = row.cells.len();

            if row_chars > self.max_chars {
                return Err(ChunkError::OversizeRow {
                    row_index,
                    char_count: row_chars,
                    limit: self.max_chars,
                });
            }

            let over_items = current_texts + row_texts > self.max_items;
            let over_chars = current_chars + row_chars > self.max_chars;
            if !current.is_empty() && (over_items || over_chars) {
                batches.push(Batch {
                    rows: std::mem::take(&mut current),
                    char_count: current_chars,
                });
                current_chars = 0;
                current_texts = 0;
            }

            current.push(row.clone());
            current_chars += row_chars;
            current_texts += row_texts;
        }

        if !current.is_empty() {
            batches.push(Batch {
                rows: current,
                char_count: current_chars,
            });
        }

        debug!("chunked {} rows into {} batches", rows.len(), batches.len());

        Ok(batches)
    }
}
