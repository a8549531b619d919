//! Shift reconstruction: fold the flat clock event stream into paired
//! in/out shifts.

use crate::models::event::ClockEvent;
use crate::models::shift::Shift;

/// Fold a chronologically ordered event sequence into shifts,
/// most recent first.
///
/// Single linear pass over the ledger order (never re-sorted; append
/// order is the ledger's contract):
/// - an In opens a shift; a second In with no intervening Out
///   (dangling-in) force-closes the previous shift with no out
/// - an Out closes the open shift; an Out with no open shift
///   (orphan-out) is discarded and produces no shift
/// - a still-open shift is emitted last, then the whole list is
///   reversed so callers see the most recent shift first
pub fn reconstruct(events: &[ClockEvent]) -> Vec<Shift> {
    let mut shifts: Vec<Shift> = Vec::new();
    let mut open: Option<ClockEvent> = None;

    for ev in events {
        if ev.kind.is_in() {
            if let Some(prev) = open.take() {
                // dangling-in: the previous In never got its Out
                shifts.push(Shift {
                    clock_in: prev,
                    clock_out: None,
                });
            }
            open = Some(ev.clone());
        } else if let Some(prev) = open.take() {
            shifts.push(Shift {
                clock_in: prev,
                clock_out: Some(ev.clone()),
            });
        }
        // orphan-out: no open shift to close, nothing to emit
    }

    if let Some(prev) = open {
        shifts.push(Shift {
            clock_in: prev,
            clock_out: None,
        });
    }

    shifts.reverse();
    shifts
}
