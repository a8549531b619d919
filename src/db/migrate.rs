//! Idempotent schema migrations, tracked through SQLite `user_version`.

use crate::errors::AppResult;
use rusqlite::{Connection, Result};

const SCHEMA_VERSION: i32 = 2;

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let version = current_version(conn)?;

    if version < 1 {
        migrate_v1_create_tables(conn)?;
    }
    if version < 2 {
        migrate_v2_add_note(conn)?;
    }

    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}

fn current_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// v1: the event ledger and the internal audit log.
///
/// `seq` is the ledger order: insertion order = chronological order, and
/// reads always go through it. `event_id` is the opaque unique id carried
/// by the event itself.
fn migrate_v1_create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            seq        INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id   TEXT NOT NULL UNIQUE,
            worker     TEXT NOT NULL,
            kind       TEXT NOT NULL CHECK(kind IN ('in','out')),
            timestamp  TEXT NOT NULL,
            latitude   REAL NOT NULL,
            longitude  REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_worker_seq ON events(worker, seq);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// v2: optional free-text note on each event.
fn migrate_v2_add_note(conn: &Connection) -> Result<()> {
    if !events_has_note_column(conn)? {
        conn.execute_batch("ALTER TABLE events ADD COLUMN note TEXT;")?;
    }
    Ok(())
}

/// Check if the `events` table has a `note` column.
fn events_has_note_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "note" {
            return Ok(true);
        }
    }
    Ok(false)
}
