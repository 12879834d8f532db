//! Command utility functions shared by the subcommand handlers.

use crate::config::Config;
use crate::core::timer::TimerService;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Build a ready-to-use TimerService from the loaded configuration.
pub fn create_timer(cfg: &Config) -> TimerService {
    TimerService::new(&cfg.database)
}

/// Resolve the optional `--date` argument, defaulting to today's date.
/// Malformed input is rejected here, before it reaches the core.
pub fn resolve_date(arg: Option<&String>) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => date::parse_date(s)
            .ok_or_else(|| AppError::InvalidDate(format!("'{}' (format must be YYYY-MM-DD)", s))),
        None => Ok(date::today()),
    }
}
