/*!
 * CSV-backed tabular store.
 *
 * Reads one column out of a CSV file and writes the translated column back,
 * leaving every other cell untouched. The write goes through a temp file in
 * the same directory followed by a rename, so a failed run never leaves a
 * half-written file behind.
 */

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::{Column, ColumnRange, Row, TabularStore};

/// Tabular store over a single CSV file.
///
/// The first record of the file is treated as a header and never read or
/// written as data; `ColumnRange::start_row` counts from the first data row
/// below it.
pub struct CsvStore {
    /// Path of the backing CSV file
    path: PathBuf,
}

impl CsvStore {
    /// Create a store over the given CSV file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into header + data records
    fn read_records(&self) -> Result<(csv::StringRecord, Vec<csv::StringRecord>)> {
        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("failed to open CSV file: {}", self.path.display()))?;

        let headers = reader.headers()?.clone();
        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("failed to read CSV file: {}", self.path.display()))?;

        Ok((headers, records))
    }
}

#[async_trait]
impl TabularStore for CsvStore {
    async fn read_column(&self, range: &ColumnRange) -> Result<Column> {
        let (_, records) = self.read_records()?;

        let mut column = Vec::new();
        for (offset, record) in records.iter().enumerate().skip(range.start_row) {
            let cell = record.get(range.column).ok_or_else(|| {
                anyhow!(
                    "column {} out of bounds at data row {}",
                    range.column,
                    offset
                )
            })?;
            column.push(Row::single(cell));
        }

        debug!(
            "read {} rows from column {} of {}",
            column.len(),
            range.column,
            self.path.display()
        );

        Ok(column)
    }

    async fn write_column(&self, range: &ColumnRange, rows: &[Row]) -> Result<()> {
        let (headers, mut records) = self.read_records()?;

        let target_len = records.len().saturating_sub(range.start_row);
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

            let record = &mut records[range.start_row + offset];
            if range.column >= record.len() {
                return Err(anyhow!(
                    "column {} out of bounds at data row {}",
                    range.column,
                    range.start_row + offset
                ));
            }

            let mut cells: Vec<&str> = record.iter().collect();
            cells[range.column] = text;
            *record = csv::StringRecord::from(cells);
        }

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let temp = NamedTempFile::new_in(dir)?;

        {
            let mut writer = csv::Writer::from_writer(temp.as_file());
            writer.write_record(&headers)?;
            for record in &records {
                writer.write_record(record)?;
            }
            writer.flush()?;
        }

        temp.persist(&self.path)
            .with_context(|| format!("failed to replace CSV file: {}", self.path.display()))?;

        debug!(
            "wrote {} rows to column {} of {}",
            rows.len(),
            range.column,
            self.path.display()
        );

        Ok(())
    }
}
