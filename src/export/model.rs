use crate::core::summary::SessionSummary;
use serde::Serialize;

/// Flat export row for one session summary. Field names become the
/// CSV header / JSON keys.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "Session Name")]
    pub session_name: String,
    #[serde(rename = "Total Events")]
    pub total_events: usize,
    #[serde(rename = "Session Duration (min)")]
    pub duration_minutes: f64,
    #[serde(rename = "Drowsy Events")]
    pub drowsy_events: usize,
    #[serde(rename = "Yawns")]
    pub yawns: usize,
    #[serde(rename = "Distractions")]
    pub distractions: usize,
    #[serde(rename = "Longest Awake (min)")]
    pub longest_awake_minutes: f64,
    #[serde(rename = "Driver Score")]
    pub driver_score: f64,
}

impl SummaryRow {
    pub fn from_summary(name: &str, summary: &SessionSummary) -> Self {
        Self {
            session_name: name.to_string(),
            total_events: summary.total_incidents,
            duration_minutes: round2(summary.duration_minutes),
            drowsy_events: summary.drowsy_count,
            yawns: summary.yawn_count,
            distractions: summary.distracted_count,
            longest_awake_minutes: round2(summary.longest_awake_minutes),
            driver_score: round2(summary.score),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
