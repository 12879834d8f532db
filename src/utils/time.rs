use chrono::{Local, NaiveDateTime, Timelike};

/// Source of "now" for timer operations.
/// Injected so tests can supply deterministic timestamps instead of
/// relying on wall-clock reads.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time source used in production. Local time, no timezone
/// conversion.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        truncate_subsec(Local::now().naive_local())
    }
}

/// Discard the sub-second component. Durations computed from truncated
/// timestamps print cleanly, with no fractional seconds to format away.
pub fn truncate_subsec(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}
