use crate::db::initialize::init_db;
use crate::db::log::wtlog;
use crate::db::queries;
use crate::db::reconcile;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::ui::messages;
use crate::utils::date::week_start;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Persistent append-only store of clock events.
///
/// A store is opened for the duration of a single operation and must be
/// closed afterwards to release the underlying connection.
pub struct EventStore {
    conn: Connection,
}

impl EventStore {
    /// Open the store: create the parent directory and the schema if
    /// missing, then repair any dangling clock-in left from a previous
    /// day. A failed repair is reported as a warning and does not block
    /// the operation the store was opened for.
    pub fn open(path: &Path, today: NaiveDate) -> AppResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        init_db(&conn)?;

        match reconcile::repair_dangling_start(&conn, today) {
            Ok(Some(repair)) => log_repair(&conn, &repair),
            Ok(None) => {}
            Err(e) => messages::warning(format!("Reconciliation failed: {}", e)),
        }

        Ok(Self { conn })
    }

    /// Append one event. A failed insert leaves the store unchanged and
    /// still usable for subsequent operations.
    pub fn append(&self, timestamp: NaiveDateTime, working: bool) -> AppResult<()> {
        queries::insert_event(&self.conn, timestamp, working)
    }

    /// All events whose timestamp falls on the given calendar date,
    /// ascending. Empty if none.
    pub fn events_on(&self, date: NaiveDate) -> AppResult<Vec<Event>> {
        queries::events_by_date(&self.conn, &date)
    }

    /// One event list per day of the ISO week containing `date`
    /// (index 0..6 = Mon..Sun).
    pub fn events_in_week(&self, date: NaiveDate) -> AppResult<Vec<Vec<Event>>> {
        let monday = week_start(date);
        (0..7)
            .map(|i| self.events_on(monday + Duration::days(i)))
            .collect()
    }

    /// Release the underlying connection. Safe to call once per store.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| AppError::Db(e))
    }
}

/// Record the repairs in the internal log table. A failed audit write is
/// reported as a warning, never an error.
fn log_repair(conn: &Connection, repair: &reconcile::Repair) {
    let mut message = format!("Inserted synthetic stop at {}", repair.closed_at);
    if let Some(reopened) = repair.reopened_at {
        message.push_str(&format!(" and synthetic start at {}", reopened));
    }

    let target = repair.closed_at.date().to_string();
    if let Err(e) = wtlog(conn, "reconcile", &target, &message) {
        messages::warning(format!("Failed to write internal log: {}", e));
    }
}
