use crate::core::blocks::{daily_blocks, weekly_blocks};
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::utils::date::weekday_name;
use crate::utils::formatting::{format_date, format_duration, format_time};
use crate::utils::time::{Clock, SystemClock};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Whether the last event of a day's ordered event list is an open
/// clock-in. This is the whole ON/OFF state machine: the state is derived
/// from the log on every call, never stored.
pub fn is_on_the_clock(events: &[Event]) -> bool {
    events.last().is_some_and(|e| e.working)
}

/// User-facing timer operations over the event store.
///
/// The service owns no open connection: every operation borrows a store
/// for its own duration and releases it on all exit paths.
pub struct TimerService {
    db_path: PathBuf,
    clock: Box<dyn Clock>,
}

impl TimerService {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self::with_clock(db_path, Box::new(SystemClock))
    }

    /// Build a service with an explicit time source, so tests can supply
    /// deterministic timestamps.
    pub fn with_clock(db_path: impl Into<PathBuf>, clock: Box<dyn Clock>) -> Self {
        Self {
            db_path: db_path.into(),
            clock,
        }
    }

    /// Open the store, run `f`, close the store on every path.
    /// The operation's error takes precedence over a close error.
    fn with_store<T>(&self, f: impl FnOnce(&EventStore) -> AppResult<T>) -> AppResult<T> {
        let store = EventStore::open(&self.db_path, self.clock.now().date())?;
        let result = f(&store);
        let closed = store.close();
        let value = result?;
        closed?;
        Ok(value)
    }

    /// Start the work timer. If it is already running, do nothing.
    /// An append failure is reported in the returned message, not raised.
    pub fn start(&self) -> AppResult<String> {
        let now = self.clock.now();
        self.with_store(|store| {
            let events = store.events_on(now.date())?;
            if is_on_the_clock(&events) {
                return Ok("You are already on the clock.".to_string());
            }

            Ok(match store.append(now, true) {
                Ok(()) => "You are now on the clock.".to_string(),
                Err(e) => format!("ERROR: Failed to log event ({}, 1): {}", now, e),
            })
        })
    }

    /// Stop the work timer. If it is already stopped, do nothing.
    pub fn stop(&self) -> AppResult<String> {
        let now = self.clock.now();
        self.with_store(|store| {
            let events = store.events_on(now.date())?;
            if !is_on_the_clock(&events) {
                return Ok("You are already off the clock.".to_string());
            }

            Ok(match store.append(now, false) {
                Ok(()) => "You are no longer on the clock.".to_string(),
                Err(e) => format!("ERROR: Failed to log event ({}, 0): {}", now, e),
            })
        })
    }

    /// Render the daily report: a header with the full date, one line per
    /// work block, and a footer with the day's total.
    pub fn daily_report(&self, date: NaiveDate) -> AppResult<String> {
        let events = self.with_store(|store| store.events_on(date))?;
        let (total, blocks) = daily_blocks(&events, self.clock.now());

        let mut lines = vec![format!("Time Worked on {}\n", format_date(date))];
        for block in &blocks {
            lines.push(format!(
                "{} - {}: {}",
                format_time(block.start),
                format_time(block.stop),
                format_duration(block.duration)
            ));
        }
        lines.push(format!("\nTotal time worked: {}", format_duration(total)));

        Ok(lines.join("\n"))
    }

    /// Render the weekly report: one line per day of the week with that
    /// day's total, and a footer with the grand total.
    pub fn weekly_report(&self, date: NaiveDate) -> AppResult<String> {
        let week = self.with_store(|store| store.events_in_week(date))?;
        let (total, daily_totals) = weekly_blocks(&week, self.clock.now());

        let mut lines = vec![format!(
            "Time worked through the Week of {}\n",
            format_date(date)
        )];
        for (i, daily_total) in daily_totals.iter().enumerate() {
            lines.push(format!(
                "{}: {}",
                weekday_name(i as u32, true),
                format_duration(*daily_total)
            ));
        }
        lines.push(format!("\nTotal time worked: {}", format_duration(total)));

        Ok(lines.join("\n"))
    }
}
