//! Detection-log loading: CSV with `Timestamp` and `Event` columns.

use crate::errors::{AppError, AppResult};
use crate::models::{EventKind, EventRecord};
use crate::utils::time::parse_timestamp;
use std::path::Path;

/// A parsed detection log, sorted ascending by timestamp.
#[derive(Debug)]
pub struct LoadedLog {
    pub records: Vec<EventRecord>,
    /// Rows discarded because their timestamp did not parse.
    pub dropped_rows: usize,
}

/// Load a session log from `path`.
///
/// Rows with unparseable timestamps are dropped (counted in
/// `dropped_rows`); a log with no valid rows at all is an input error.
pub fn load_log(path: &Path) -> AppResult<LoadedLog> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let ts_idx = column_index(&headers, "Timestamp")?;
    let ev_idx = column_index(&headers, "Event")?;

    let mut records = Vec::new();
    let mut dropped_rows = 0;

    for row in reader.records() {
        let row = row?;
        let raw_ts = row.get(ts_idx).unwrap_or("");
        let raw_ev = row.get(ev_idx).unwrap_or("");

        match parse_timestamp(raw_ts) {
            Some(ts) => records.push(EventRecord::new(ts, EventKind::from_label(raw_ev))),
            None => dropped_rows += 1,
        }
    }

    if records.is_empty() {
        return Err(AppError::EmptyLog);
    }

    records.sort_by_key(|r| r.timestamp);

    Ok(LoadedLog {
        records,
        dropped_rows,
    })
}

fn column_index(headers: &csv::StringRecord, name: &str) -> AppResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| AppError::MissingColumn(name.to_string()))
}

/// Session name used in summaries and export rows: the log file stem.
pub fn session_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "session".to_string())
}
