use chrono::NaiveDateTime;

/// A single clock-in or clock-out record.
///
/// Events are append-only: once written they are never updated or deleted.
/// The `working` flag is true for a clock-in and false for a clock-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub timestamp: NaiveDateTime, // ⇔ event.timestamp (TEXT, ISO-8601, second precision)
    pub working: bool,            // ⇔ event.working (INTEGER 0/1)
}

impl Event {
    pub fn new(timestamp: NaiveDateTime, working: bool) -> Self {
        Self { timestamp, working }
    }
}
