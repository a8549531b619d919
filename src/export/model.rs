use crate::models::shift::Shift;
use crate::utils::formatting::format_duration;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Flat record for shift export. One row per reconstructed shift, open
/// shifts included (empty out fields, status "open").
#[derive(Serialize, Clone, Debug)]
pub struct ShiftExport {
    pub date: String,
    pub clock_in: String,
    pub clock_out: Option<String>,
    pub duration: String,
    pub status: String,
    pub in_latitude: f64,
    pub in_longitude: f64,
    pub out_latitude: Option<f64>,
    pub out_longitude: Option<f64>,
    pub in_note: Option<String>,
    pub out_note: Option<String>,
}

impl ShiftExport {
    pub fn from_shift(shift: &Shift, now: DateTime<Local>) -> Self {
        let out = shift.clock_out.as_ref();

        Self {
            date: shift.clock_in.date_str(),
            clock_in: shift.clock_in.timestamp_str(),
            clock_out: out.map(|e| e.timestamp_str()),
            duration: format_duration(shift.duration(now), false),
            status: if shift.is_open() { "open" } else { "completed" }.to_string(),
            in_latitude: shift.clock_in.location.latitude,
            in_longitude: shift.clock_in.location.longitude,
            out_latitude: out.map(|e| e.location.latitude),
            out_longitude: out.map(|e| e.location.longitude),
            in_note: shift.clock_in.note.clone(),
            out_note: out.and_then(|e| e.note.clone()),
        }
    }
}
