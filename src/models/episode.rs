use super::record::EventRecord;
use chrono::NaiveDateTime;

/// A temporally clustered run of incident events, treated as one
/// reviewable unit. Always non-empty, events sorted ascending.
#[derive(Debug, Clone)]
pub struct Episode {
    pub events: Vec<EventRecord>,
}

impl Episode {
    pub fn new(events: Vec<EventRecord>) -> Self {
        debug_assert!(!events.is_empty());
        Self { events }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.events[0].timestamp
    }

    pub fn end(&self) -> NaiveDateTime {
        self.events[self.events.len() - 1].timestamp
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct event labels present, in first-appearance order.
    pub fn kinds(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for ev in &self.events {
            let label = ev.kind.label();
            if !seen.contains(&label) {
                seen.push(label);
            }
        }
        seen
    }
}
