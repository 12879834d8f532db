use chrono::{Duration, NaiveDateTime};

/// One continuous work session, derived from a (start, stop) event pair.
/// Blocks are recomputed from stored events on every report, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkBlock {
    pub start: NaiveDateTime,
    pub stop: NaiveDateTime,
    pub duration: Duration,
}
