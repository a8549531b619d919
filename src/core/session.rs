//! Worker-facing clock controller: tracks the clocked-in/out state,
//! consults the perimeter gate before permitting a clock-in, and is the
//! only writer of ledger state for a given worker.

use crate::core::gate::{self, GateDecision};
use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::location::LocationError;
use crate::models::event::ClockEvent;
use crate::models::event_type::EventType;
use crate::models::perimeter::Perimeter;
use crate::models::position::Position;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    ClockedOut,
    ClockedIn,
}

/// Read-only snapshot for presentation consumers.
#[derive(Debug, Clone)]
pub struct ClockSessionState {
    pub is_clocked_in: bool,
    pub within_perimeter: bool,
    pub last_known_position: Option<Position>,
}

pub struct ClockSession {
    state: ClockState,
    decision: GateDecision,
    last_fix: Option<Position>,
}

impl ClockSession {
    /// Derive the initial state from the ledger: clocked in iff the
    /// chronologically last event is an In. The status is a derivation,
    /// never a separately stored flag, so it cannot diverge from the
    /// ledger.
    pub fn from_ledger(events: &[ClockEvent]) -> Self {
        let state = match events.last() {
            Some(ev) if ev.kind.is_in() => ClockState::ClockedIn,
            _ => ClockState::ClockedOut,
        };
        Self {
            state,
            decision: GateDecision::default(),
            last_fix: None,
        }
    }

    /// Feed one position sample through the gate. Last sample wins: the
    /// previous decision is overwritten, and a failed sample also clears
    /// the current fix (fail closed for both clock directions).
    pub fn observe(&mut self, sample: &Result<Position, LocationError>, perimeter: &Perimeter) {
        self.decision = gate::evaluate(sample, perimeter);
        self.last_fix = sample.as_ref().ok().copied();
    }

    pub fn is_clocked_in(&self) -> bool {
        self.state == ClockState::ClockedIn
    }

    pub fn decision(&self) -> &GateDecision {
        &self.decision
    }

    pub fn snapshot(&self) -> ClockSessionState {
        ClockSessionState {
            is_clocked_in: self.is_clocked_in(),
            within_perimeter: self.decision.within_perimeter,
            last_known_position: self.last_fix,
        }
    }

    /// ClockedOut --clock_in--> ClockedIn.
    ///
    /// Requires a current position sample and an open gate. On success
    /// exactly one event is appended and the state flips; on any failure
    /// nothing is written and the state is unchanged.
    pub fn clock_in(
        &mut self,
        ledger: &mut Ledger,
        note: Option<String>,
        now: DateTime<Local>,
    ) -> AppResult<ClockEvent> {
        if self.state == ClockState::ClockedIn {
            return Err(AppError::IllegalTransition(
                "already clocked in; clock out first".to_string(),
            ));
        }

        let fix = self.current_fix()?;

        if !self.decision.within_perimeter {
            return match (self.decision.distance_km, self.decision.radius_km) {
                (Some(distance_km), Some(radius_km)) => Err(AppError::OutsidePerimeter {
                    distance_km,
                    radius_km,
                }),
                _ => Err(AppError::LocationUnavailable(self.deny_reason())),
            };
        }

        let event = ClockEvent::new(EventType::In, now, fix, note);
        ledger.append(&event)?;
        self.state = ClockState::ClockedIn;
        Ok(event)
    }

    /// ClockedIn --clock_out--> ClockedOut.
    ///
    /// Requires a current sample but NOT containment: a worker may leave
    /// the zone and still end the shift.
    pub fn clock_out(
        &mut self,
        ledger: &mut Ledger,
        note: Option<String>,
        now: DateTime<Local>,
    ) -> AppResult<ClockEvent> {
        if self.state == ClockState::ClockedOut {
            return Err(AppError::IllegalTransition(
                "not clocked in; nothing to clock out of".to_string(),
            ));
        }

        let fix = self.current_fix()?;

        let event = ClockEvent::new(EventType::Out, now, fix, note);
        ledger.append(&event)?;
        self.state = ClockState::ClockedOut;
        Ok(event)
    }

    fn current_fix(&self) -> AppResult<Position> {
        self.last_fix
            .ok_or_else(|| AppError::LocationUnavailable(self.deny_reason()))
    }

    fn deny_reason(&self) -> String {
        self.decision
            .reason
            .clone()
            .unwrap_or_else(|| "no position sample".to_string())
    }
}
