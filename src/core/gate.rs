//! Perimeter gate: decides whether the current position sample permits a
//! clock-in. Pure function of (sample, perimeter); all state lives in the
//! clock session, which keeps only the latest decision (last-sample-wins).

use crate::core::geo;
use crate::location::LocationError;
use crate::models::perimeter::Perimeter;
use crate::models::position::Position;

#[derive(Debug, Clone)]
pub struct GateDecision {
    pub within_perimeter: bool,
    /// Measured distance to the zone center, when a sample was readable.
    pub distance_km: Option<f64>,
    /// Radius the sample was evaluated against.
    pub radius_km: Option<f64>,
    /// Set when the gate is closed: the underlying sampling error, or the
    /// distance that exceeded the radius.
    pub reason: Option<String>,
}

impl Default for GateDecision {
    /// Before any sample arrives the gate is closed: absence of a
    /// trustworthy position must never be treated as "inside".
    fn default() -> Self {
        Self {
            within_perimeter: false,
            distance_km: None,
            radius_km: None,
            reason: Some("no position sample received yet".to_string()),
        }
    }
}

pub fn evaluate(sample: &Result<Position, LocationError>, perimeter: &Perimeter) -> GateDecision {
    let position = match sample {
        Ok(p) => *p,
        Err(e) => {
            return GateDecision {
                within_perimeter: false,
                distance_km: None,
                radius_km: Some(perimeter.radius_km),
                reason: Some(e.to_string()),
            };
        }
    };

    let distance = geo::distance_km(position, perimeter.center);

    if distance.is_nan() {
        // Unknown distance: fail closed.
        return GateDecision {
            within_perimeter: false,
            distance_km: None,
            radius_km: Some(perimeter.radius_km),
            reason: Some("position could not be measured".to_string()),
        };
    }

    if distance <= perimeter.radius_km {
        GateDecision {
            within_perimeter: true,
            distance_km: Some(distance),
            radius_km: Some(perimeter.radius_km),
            reason: None,
        }
    } else {
        GateDecision {
            within_perimeter: false,
            distance_km: Some(distance),
            radius_km: Some(perimeter.radius_km),
            reason: Some(format!(
                "{:.3} km from the zone center (allowed radius {:.3} km)",
                distance, perimeter.radius_km
            )),
        }
    }
}
