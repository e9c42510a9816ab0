use std::io;

use crate::error::{Error, Result};
use crate::format::DisplayRecord;

/// Column header of exported tables.
pub const HEADER: [&str; 5] = ["i", "X(i-1)", "Operation", "Xi", "rᵢ"];

/// Writes records as CSV, header first, rows in the given order.
/// An empty table is an error: there is nothing generated yet.
pub fn write_csv<W: io::Write>(records: &[DisplayRecord], writer: W) -> Result<()> {
    if records.is_empty() {
        return Err(Error::EmptyTable);
    }
    let mut writer = csv::WriterBuilder::new().from_writer(writer);
    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([
            record.index.to_string(),
            record.previous.to_string(),
            record.operation.clone(),
            record.value.to_string(),
            record.ratio.clone(),
        ])?;
    }
    writer.flush()?;
    tracing::debug!(rows = records.len(), "exported csv");
    Ok(())
}

/// Renders records as a CSV string.
pub fn to_csv_string(records: &[DisplayRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
