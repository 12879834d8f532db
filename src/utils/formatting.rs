//! Formatting helpers for report output.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Format a date the way reports print it, e.g. "Monday, 19 May 2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %d %B %Y").to_string()
}

/// Format a time of day, e.g. "09:00AM".
pub fn format_time(dt: NaiveDateTime) -> String {
    dt.format("%I:%M%p").to_string()
}

/// Format an elapsed time as H:MM:SS, e.g. "7:00:00".
pub fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
