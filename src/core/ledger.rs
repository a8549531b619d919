//! Append-only clock event ledger, one per worker.

use crate::db::pool::DbPool;
use crate::db::queries::{count_events, insert_event, last_event, load_events};
use crate::errors::AppResult;
use crate::models::event::ClockEvent;

/// Ordered, append-only log of clock events for a single worker.
///
/// Insertion order is chronological order: callers append events in the
/// order they occur, and the ledger never re-sorts. Events are immutable
/// once appended; there are no update or delete operations here.
pub struct Ledger<'p> {
    pool: &'p mut DbPool,
    worker: String,
}

impl<'p> Ledger<'p> {
    pub fn new(pool: &'p mut DbPool, worker: &str) -> Self {
        Self {
            pool,
            worker: worker.to_string(),
        }
    }

    /// Append an event at the end of the ledger. Timestamp monotonicity is
    /// the caller's responsibility.
    pub fn append(&mut self, event: &ClockEvent) -> AppResult<()> {
        insert_event(&self.pool.conn, &self.worker, event)
    }

    /// Chronologically ordered, restartable read of the whole ledger.
    pub fn read_all(&mut self) -> AppResult<Vec<ClockEvent>> {
        load_events(self.pool, &self.worker)
    }

    /// The most recent event, if any. Used to derive the session state.
    pub fn last(&mut self) -> AppResult<Option<ClockEvent>> {
        last_event(self.pool, &self.worker)
    }

    pub fn len(&mut self) -> AppResult<usize> {
        count_events(self.pool, &self.worker)
    }
}
