//! Great-circle geometry over WGS-84 coordinates.

use crate::models::perimeter::Perimeter;
use crate::models::position::Position;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two positions, in kilometers.
///
/// Inputs are assumed to be valid degree coordinates; NaN coordinates
/// propagate NaN, which callers must treat as "unknown, fail closed".
pub fn distance_km(a: Position, b: Position) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Inclusive containment: a point exactly on the boundary counts as inside.
/// A NaN distance compares false, so an unreadable position is outside.
pub fn is_within(position: Position, perimeter: &Perimeter) -> bool {
    distance_km(position, perimeter.center) <= perimeter.radius_km
}
