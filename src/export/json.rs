use crate::errors::{AppError, AppResult};
use crate::export::model::ShiftExport;
use std::io;

/// Write the shift records as pretty-printed JSON.
pub fn write_json<W: io::Write>(mut out: W, records: &[ShiftExport]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, records).map_err(|e| AppError::Export(e.to_string()))?;
    out.write_all(b"\n")?;
    Ok(())
}
