use crate::errors::{AppError, AppResult};
use crate::export::model::ShiftExport;
use csv::Writer;
use std::io;

/// Write the shift records as CSV. Headers come from the record's field
/// names via serde.
pub fn write_csv<W: io::Write>(out: W, records: &[ShiftExport]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    for rec in records {
        wtr.serialize(rec)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
