use std::fs::File;
use std::io::Read;
use std::path::Path;
use anyhow::{Result, Context};
use csv::{ReaderBuilder, StringRecord};
use log::info;

use crate::alignment::{AlignmentRecord, ALIGNMENT_COLUMNS};
use crate::error::CollateError;

/// Read a headerless, comma separated BLAST table
pub fn read_alignment_table(path: &Path) -> Result<Vec<AlignmentRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let records = read_alignment_records(file, path)?;
    info!("Read {} hits from {}", records.len(), path.display());
    Ok(records)
}

/// Parse BLAST rows from any reader. `path` is only used in error messages.
pub fn read_alignment_records<R: Read>(reader: R, path: &Path) -> Result<Vec<AlignmentRecord>> {
    // flexible so a short or long row is reported with its line number
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(b',')
        .from_reader(reader);

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    while rdr
        .read_record(&mut row)
        .with_context(|| format!("Failed to parse {}", path.display()))?
    {
        if row.len() != ALIGNMENT_COLUMNS.len() {
            return Err(CollateError::ColumnCount {
                path: path.to_owned(),
                line: row.position().map_or(0, |pos| pos.line()),
                found: row.len(),
            }
            .into());
        }
        let record: AlignmentRecord = row
            .deserialize(None)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(CollateError::EmptyInput(path.to_owned()).into());
    }

    Ok(records)
}
