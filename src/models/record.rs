use super::event_kind::EventKind;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the detection log. Immutable once loaded.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventRecord {
    pub timestamp: NaiveDateTime, // ⇔ log column "Timestamp"
    pub kind: EventKind,          // ⇔ log column "Event"
}

impl EventRecord {
    pub fn new(timestamp: NaiveDateTime, kind: EventKind) -> Self {
        Self { timestamp, kind }
    }
}
