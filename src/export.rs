//! CSV serialization of the flat tabular view
//!
//! Exports are UTF-8 with a leading byte-order mark, a header row with the
//! seven table columns, and one data row per projected year. Money fields are
//! fixed to two decimals with `.` as the decimal separator.

use std::io::Write;

use thiserror::Error;

use crate::projection::{ProjectionResult, TABLE_COLUMNS};

/// UTF-8 byte-order mark written ahead of the header row
pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Failure while serializing or writing the CSV export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O failure writing export: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the projection table as CSV to any writer
pub fn write_csv<W: Write>(result: &ProjectionResult, mut writer: W) -> Result<(), ExportError> {
    writer.write_all(UTF8_BOM)?;

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(TABLE_COLUMNS)?;
    for row in &result.rows {
        csv.write_record(row.table_cells())?;
    }
    csv.flush()?;

    Ok(())
}

/// Render the CSV export as an in-memory buffer
pub fn to_csv_bytes(result: &ProjectionResult) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    write_csv(result, &mut buffer)?;
    Ok(buffer)
}
