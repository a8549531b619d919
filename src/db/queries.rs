use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::ClockEvent;
use crate::models::event_type::EventType;
use crate::models::position::Position;
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn insert_event(conn: &Connection, worker: &str, ev: &ClockEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO events (event_id, worker, kind, timestamp, latitude, longitude, note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ev.id,
            worker,
            ev.kind.to_db_str(),
            ev.timestamp.to_rfc3339(),
            ev.location.latitude,
            ev.location.longitude,
            ev.note,
        ],
    )?;
    Ok(())
}

/// Load the full ledger of one worker in insertion order.
pub fn load_events(pool: &mut DbPool, worker: &str) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM events
         WHERE worker = ?1
         ORDER BY seq ASC",
    )?;

    let rows = stmt.query_map([worker], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn last_event(pool: &mut DbPool, worker: &str) -> AppResult<Option<ClockEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM events
         WHERE worker = ?1
         ORDER BY seq DESC
         LIMIT 1",
    )?;

    let ev = stmt.query_row([worker], map_row).optional()?;
    Ok(ev)
}

pub fn count_events(pool: &mut DbPool, worker: &str) -> AppResult<usize> {
    let n: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM events WHERE worker = ?1",
        [worker],
        |row| row.get(0),
    )?;
    Ok(n as usize)
}

pub fn map_row(row: &Row) -> Result<ClockEvent> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp: DateTime<Local> = DateTime::parse_from_rfc3339(&ts_str)
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(ts_str.clone())),
            )
        })?
        .with_timezone(&Local);

    let kind_str: String = row.get("kind")?;
    let kind = EventType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventKind(kind_str.clone())),
        )
    })?;

    Ok(ClockEvent {
        id: row.get("event_id")?,
        kind,
        timestamp,
        location: Position::new(row.get("latitude")?, row.get("longitude")?),
        note: row.get("note")?,
    })
}
