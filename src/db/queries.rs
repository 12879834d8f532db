use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};

/// Timestamps are stored as ISO-8601 text at second precision, so their
/// lexicographic order is their chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn map_row(row: &Row) -> Result<Event> {
    let ts_str: String = row.get("timestamp")?;

    let timestamp = NaiveDateTime::parse_from_str(&ts_str, TIMESTAMP_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(ts_str.clone())),
        )
    })?;

    let working: i32 = row.get("working")?;

    Ok(Event::new(timestamp, working == 1))
}

/// Insert one event. A single INSERT commits or rolls back as a unit.
pub fn insert_event(conn: &Connection, timestamp: NaiveDateTime, working: bool) -> AppResult<()> {
    conn.execute(
        "INSERT INTO event (timestamp, working) VALUES (?1, ?2)",
        params![
            timestamp.format(TIMESTAMP_FORMAT).to_string(),
            i32::from(working)
        ],
    )?;
    Ok(())
}

/// All events on the given calendar date, oldest first. Events sharing a
/// timestamp (a start and stop within the same second) keep insertion order.
pub fn events_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare(
        "SELECT timestamp, working FROM event
         WHERE timestamp LIKE ?1
         ORDER BY timestamp ASC, event_id ASC",
    )?;

    // Match every event of the date, whatever its time of day.
    let pattern = format!("{}%", date.format("%Y-%m-%d"));

    let rows = stmt.query_map([pattern], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The single most recent event across the entire log, if any.
pub fn latest_event(conn: &Connection) -> AppResult<Option<Event>> {
    let mut stmt = conn.prepare(
        "SELECT timestamp, working FROM event
         ORDER BY timestamp DESC, event_id DESC LIMIT 1",
    )?;

    let event = stmt.query_row([], map_row).optional()?;
    Ok(event)
}
