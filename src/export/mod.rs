mod csv;
mod json;
mod model;

pub use model::ShiftExport;

use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::ui::messages::success;
use chrono::{DateTime, Local};
use clap::ValueEnum;
use std::fs::File;
use std::io;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Export reconstructed shifts to the requested format, to a file when an
/// output path is given and to stdout otherwise. Open shifts are measured
/// against `now`, so an export is a snapshot, not a ledger mutation.
pub fn export_shifts(
    format: &ExportFormat,
    shifts: &[Shift],
    now: DateTime<Local>,
    output: Option<&str>,
) -> AppResult<()> {
    let records: Vec<ShiftExport> = shifts.iter().map(|s| ShiftExport::from_shift(s, now)).collect();

    match output {
        Some(path) => {
            let file = File::create(Path::new(path))
                .map_err(|e| AppError::Export(format!("cannot create {}: {}", path, e)))?;
            write_to(format, &records, file)?;
            notify_export_success(format.as_str(), path);
        }
        None => {
            write_to(format, &records, io::stdout().lock())?;
        }
    }

    Ok(())
}

fn write_to<W: io::Write>(format: &ExportFormat, records: &[ShiftExport], out: W) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::write_csv(out, records),
        ExportFormat::Json => json::write_json(out, records),
    }
}

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &str) {
    success(format!("{label} export completed: {}", path));
}
