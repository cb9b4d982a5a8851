//! Groups nearby incident events into episodes by temporal proximity.

use crate::models::{Episode, EventRecord};
use crate::utils::time::seconds_between;

/// Cluster time-ordered incident records into episodes.
///
/// A record within `threshold_seconds` of the previous one extends the
/// current episode; a larger gap starts a new episode. The input is
/// sorted by timestamp first (stable for ties), so the result depends
/// only on the records themselves.
pub fn group_episodes(records: &[EventRecord], threshold_seconds: f64) -> Vec<Episode> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.timestamp);

    let mut episodes = Vec::new();
    let mut current: Vec<EventRecord> = Vec::new();

    for record in sorted {
        match current.last() {
            Some(prev) if seconds_between(prev.timestamp, record.timestamp) > threshold_seconds => {
                episodes.push(Episode::new(std::mem::take(&mut current)));
                current.push(record);
            }
            _ => current.push(record),
        }
    }

    if !current.is_empty() {
        episodes.push(Episode::new(current));
    }

    episodes
}
