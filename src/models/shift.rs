use super::event::ClockEvent;
use chrono::{DateTime, Duration, Local};

/// A reconstructed pairing of one clock-in with its clock-out.
/// `clock_out == None` means the shift is still open. Shifts are derived
/// on demand and never persisted.
#[derive(Debug, Clone)]
pub struct Shift {
    pub clock_in: ClockEvent,
    pub clock_out: Option<ClockEvent>,
}

impl Shift {
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Elapsed time of the shift. Open shifts are measured against `now`.
    /// Clamped to zero when the clock-in lies in the future (clock skew).
    pub fn duration(&self, now: DateTime<Local>) -> Duration {
        let end = self
            .clock_out
            .as_ref()
            .map(|e| e.timestamp)
            .unwrap_or(now);
        let elapsed = end - self.clock_in.timestamp;
        if elapsed < Duration::zero() {
            Duration::zero()
        } else {
            elapsed
        }
    }
}
