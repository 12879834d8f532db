use crate::db::queries::{insert_event, latest_event};
use crate::errors::AppResult;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;

/// Synthetic events inserted by one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    pub closed_at: NaiveDateTime,
    pub reopened_at: Option<NaiveDateTime>,
}

/// Repair a dangling clock-in left open on a previous day.
///
/// Users forget to clock out, or work through the night into the next day,
/// which leaves the newest event of the log a start with no matching stop.
/// Runs once while the store is opened, before any other operation:
/// - no events, or the newest event is a stop: nothing to do;
/// - the newest event is a start dated today: a still-open session is
///   normal, the user or a later pass will close it;
/// - otherwise, close that day with a stop at 23:59:59. If the dangling
///   start was exactly yesterday, assume an overnight session and reopen
///   the clock with a start at 00:00:00 today. A larger gap makes no such
///   assumption, since nobody works continuously for more than a day.
///
/// This is a best-effort repair: a failed insert aborts the pass with an
/// error, and downstream calculation tolerates the unpaired event.
pub fn repair_dangling_start(conn: &Connection, today: NaiveDate) -> AppResult<Option<Repair>> {
    let Some(last) = latest_event(conn)? else {
        return Ok(None);
    };
    if !last.working {
        return Ok(None);
    }

    let last_date = last.timestamp.date();
    if last_date == today {
        return Ok(None);
    }

    let closed_at = last_date.and_hms_opt(23, 59, 59).unwrap();
    insert_event(conn, closed_at, false)?;

    let gap = (today - last_date).num_days();
    if gap > 1 {
        return Ok(Some(Repair {
            closed_at,
            reopened_at: None,
        }));
    }

    let reopened_at = today.and_hms_opt(0, 0, 0).unwrap();
    insert_event(conn, reopened_at, true)?;

    Ok(Some(Repair {
        closed_at,
        reopened_at: Some(reopened_at),
    }))
}
