use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema if it does not already exist.
///
/// `event` is the append-only clock-event log; `log` is the internal audit
/// table recording system-triggered repairs.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS event (
            event_id  INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            working   INTEGER NOT NULL CHECK(working IN (0, 1))
        );
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
