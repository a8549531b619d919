//! Position-source collaborator boundary.
//!
//! The engine never talks to GPS hardware itself: it consumes
//! `Result<Position, LocationError>` samples. On the CLI a sample comes
//! either from explicit `--lat/--lon` arguments or from a JSON fix file
//! written by an external companion process (gpsd bridge, phone relay, ...).

use crate::errors::{AppError, AppResult};
use crate::models::position::Position;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("no position fix available")]
    NoFix,

    #[error("location permission denied")]
    PermissionDenied,

    #[error("timed out waiting for a position fix")]
    Timeout,

    #[error("position source error: {0}")]
    Source(String),
}

/// A source of live position samples. One sample per call; errors are
/// ordinary values that the gate turns into fail-closed decisions.
pub trait LocationProvider {
    fn sample(&self) -> Result<Position, LocationError>;
}

/// Fixed coordinates, typically taken from CLI arguments.
pub struct ManualFix {
    position: Position,
}

impl ManualFix {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

impl LocationProvider for ManualFix {
    fn sample(&self) -> Result<Position, LocationError> {
        Ok(self.position)
    }
}

/// On-disk fix format: `{"latitude": .., "longitude": ..}`.
#[derive(Debug, Deserialize)]
struct FixRecord {
    latitude: f64,
    longitude: f64,
}

/// Reads the most recent fix from a JSON file maintained by an external
/// position daemon. A missing file means no fix has been delivered yet.
pub struct FixFile {
    path: PathBuf,
}

impl FixFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl LocationProvider for FixFile {
    fn sample(&self) -> Result<Position, LocationError> {
        if !self.path.exists() {
            return Err(LocationError::NoFix);
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| LocationError::Source(format!("cannot read fix file: {}", e)))?;

        let fix: FixRecord = serde_json::from_str(&raw)
            .map_err(|e| LocationError::Source(format!("malformed fix file: {}", e)))?;

        // A fix with out-of-range coordinates is a broken source, not a
        // caller error: surface it as a sampling failure so the gate
        // stays closed.
        Position::checked(fix.latitude, fix.longitude)
            .map_err(|e| LocationError::Source(e.to_string()))
    }
}

/// Resolve the sample for one CLI invocation.
///
/// Explicit coordinates win over the configured fix file. Invalid explicit
/// coordinates are a caller error (hard failure); everything that goes
/// wrong with the fix file is a sampling error the gate fails closed on.
pub fn resolve(
    lat: Option<f64>,
    lon: Option<f64>,
    fix_file: Option<&str>,
) -> AppResult<Result<Position, LocationError>> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            let pos = Position::checked(lat, lon)?;
            Ok(ManualFix::new(pos).sample())
        }
        (Some(_), None) | (None, Some(_)) => Err(AppError::InvalidCoordinate(
            "--lat and --lon must be given together".to_string(),
        )),
        (None, None) => match fix_file {
            Some(path) => Ok(FixFile::new(Path::new(path)).sample()),
            None => Ok(Err(LocationError::NoFix)),
        },
    }
}
