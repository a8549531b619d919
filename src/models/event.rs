use super::{event_type::EventType, position::Position};
use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

/// A single clock event, immutable once appended to the ledger.
#[derive(Debug, Clone, Serialize)]
pub struct ClockEvent {
    pub id: String,               // ⇔ events.event_id (TEXT, unique)
    pub kind: EventType,          // ⇔ events.kind ('in' | 'out')
    pub timestamp: DateTime<Local>, // ⇔ events.timestamp (TEXT, RFC 3339)
    pub location: Position,       // ⇔ events.latitude / events.longitude (REAL)
    pub note: Option<String>,     // ⇔ events.note (TEXT, nullable)
}

impl ClockEvent {
    /// Build a new event with a fresh opaque id. UUID v4 keeps ids unique
    /// even for events created in the same instant.
    pub fn new(
        kind: EventType,
        timestamp: DateTime<Local>,
        location: Position,
        note: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            timestamp,
            location,
            note,
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.to_rfc3339()
    }

    pub fn date_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
