use super::position::Position;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Manager-defined circular work zone gating clock-in eligibility.
/// Immutable per evaluation; reconfigured between evaluations via `config`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perimeter {
    pub center: Position,
    pub radius_km: f64,
}

impl Perimeter {
    /// Invariant: `radius_km` is finite and > 0.
    pub fn new(center: Position, radius_km: f64) -> AppResult<Self> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(AppError::InvalidRadius(format!(
                "radius must be a positive number of kilometers, got {}",
                radius_km
            )));
        }
        Ok(Self { center, radius_km })
    }
}
