use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validating constructor for coordinates that enter from the outside
    /// (CLI arguments, fix files, perimeter config). Inside the core,
    /// invalid values are allowed to propagate and fail closed at the gate.
    pub fn checked(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "latitude {} out of range (-90..90)",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "longitude {} out of range (-180..180)",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// "lat, lon" with 6 decimals, the precision shown everywhere in the UI.
    pub fn display(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
