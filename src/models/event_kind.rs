use serde::Serialize;

/// Detection label attached to each log row. "Awake" is the baseline
/// state; every other label is an incident.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum EventKind {
    Awake,
    Drowsy,
    Yawning,
    Distracted,
    Other(String),
}

impl EventKind {
    pub fn from_label(s: &str) -> Self {
        match s {
            "Awake" => EventKind::Awake,
            "Drowsy" => EventKind::Drowsy,
            "Yawning" => EventKind::Yawning,
            "Distracted" => EventKind::Distracted,
            other => EventKind::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EventKind::Awake => "Awake",
            EventKind::Drowsy => "Drowsy",
            EventKind::Yawning => "Yawning",
            EventKind::Distracted => "Distracted",
            EventKind::Other(s) => s,
        }
    }

    pub fn is_baseline(&self) -> bool {
        matches!(self, EventKind::Awake)
    }

    /// Every non-baseline label counts as an incident.
    pub fn is_incident(&self) -> bool {
        !self.is_baseline()
    }
}
