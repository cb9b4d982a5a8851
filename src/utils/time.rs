//! Time utilities: parsing log timestamps and duration math.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use regex::Regex;

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub fn parse_timestamp(t: &str) -> Option<NaiveDateTime> {
    // Sensors log sub-second precision inconsistently; strip the
    // fraction before trying the known formats.
    let re = Regex::new(r"\.\d+$").unwrap();
    let cleaned = re.replace(t.trim(), "");

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&cleaned, fmt).ok())
}

pub fn parse_timestamp_arg(t: &str) -> AppResult<NaiveDateTime> {
    parse_timestamp(t).ok_or_else(|| AppError::InvalidTimestamp(t.to_string()))
}

/// Signed distance `end - start` in seconds, sub-second precision kept.
pub fn seconds_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / 1000.0
}
