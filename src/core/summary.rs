//! Session summary: incident counts, awake-streak reconstruction and the
//! derived driver score.

use crate::core::score::{compute_score, rating};
use crate::models::{EventKind, EventRecord};
use crate::utils::time::seconds_between;
use chrono::NaiveDateTime;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub session_start: NaiveDateTime,
    pub session_end: NaiveDateTime,
    pub duration_minutes: f64,
    pub total_incidents: usize,
    /// Incident labels with their counts, most frequent first.
    pub kind_counts: Vec<(String, usize)>,
    pub drowsy_count: usize,
    pub yawn_count: usize,
    pub distracted_count: usize,
    /// Closed awake streaks, in seconds, in chronological order.
    pub awake_streaks: Vec<f64>,
    pub longest_awake_minutes: f64,
    pub total_non_awake_seconds: f64,
    pub events_per_minute: f64,
    pub score: f64,
}

impl SessionSummary {
    pub fn rating(&self) -> &'static str {
        rating(self.score)
    }
}

/// Build the aggregate summary over one full pass of the record sequence.
///
/// The session is assumed to begin in the awake state: the first open
/// streak starts at `session_start`, so an incident logged before any
/// Awake record closes a streak of the elapsed lead-in. An open streak
/// at the end of the log closes at `session_end`.
pub fn summarize(
    records: &[EventRecord],
    session_start: NaiveDateTime,
    session_end: NaiveDateTime,
) -> SessionSummary {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.timestamp);

    // -----------------------------
    // Incident counts
    // -----------------------------
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in sorted.iter().filter(|r| r.kind.is_incident()) {
        *counts.entry(r.kind.label()).or_insert(0) += 1;
    }

    let total_incidents: usize = counts.values().sum();
    let count_of = |label: &str| counts.get(label).copied().unwrap_or(0);
    let drowsy_count = count_of(EventKind::Drowsy.label());
    let yawn_count = count_of(EventKind::Yawning.label());
    let distracted_count = count_of(EventKind::Distracted.label());

    let mut kind_counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    kind_counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    // -----------------------------
    // Awake-streak reconstruction
    // -----------------------------
    let mut awake_streaks = Vec::new();
    let mut open_streak_start = Some(session_start);

    for r in &sorted {
        if r.kind.is_incident() {
            if let Some(start) = open_streak_start.take() {
                awake_streaks.push(seconds_between(start, r.timestamp));
            }
        } else if open_streak_start.is_none() {
            open_streak_start = Some(r.timestamp);
        }
    }

    if let Some(start) = open_streak_start {
        awake_streaks.push(seconds_between(start, session_end));
    }

    // -----------------------------
    // Derived metrics
    // -----------------------------
    let duration_seconds = seconds_between(session_start, session_end);
    let duration_minutes = duration_seconds / 60.0;

    let longest_awake_minutes = awake_streaks.iter().cloned().fold(0.0, f64::max) / 60.0;
    let total_non_awake_seconds = duration_seconds - awake_streaks.iter().sum::<f64>();

    let events_per_minute = if duration_minutes > 0.0 {
        total_incidents as f64 / duration_minutes
    } else {
        0.0
    };

    let score = compute_score(
        drowsy_count,
        yawn_count,
        distracted_count,
        total_non_awake_seconds / 60.0,
        longest_awake_minutes,
    );

    SessionSummary {
        session_start,
        session_end,
        duration_minutes,
        total_incidents,
        kind_counts,
        drowsy_count,
        yawn_count,
        distracted_count,
        awake_streaks,
        longest_awake_minutes,
        total_non_awake_seconds,
        events_per_minute,
        score,
    }
}
