//! Unified application error type.
//! All modules (db, core, cli, location, export) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid perimeter radius: {0}")]
    InvalidRadius(String),

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Clock logic errors
    // ---------------------------
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    #[error(
        "Outside the work area: {distance_km:.3} km from the zone center (allowed radius {radius_km:.3} km)"
    )]
    OutsidePerimeter { distance_km: f64, radius_km: f64 },

    #[error("Illegal transition: {0}")]
    IllegalTransition(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
