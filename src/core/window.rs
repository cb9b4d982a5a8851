//! Converts an episode's time span into a video-relative extraction window.

use crate::errors::{AppError, AppResult};
use crate::models::Episode;
use crate::utils::time::seconds_between;
use chrono::NaiveDateTime;

/// Extraction window relative to the video file's own timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    pub start_seconds: f64,
    pub duration_seconds: f64,
}

/// Compute the padded extraction window for an episode.
///
/// The window covers `[episode.start - padding, episode.end + padding]`.
/// When the padded start falls before the video begins, the window is
/// clamped to 0 and the duration shrinks by the overflow; the lost
/// lead-in is not shifted to the tail. An episode that ends before the
/// video starts has no extractable window and yields `PreVideoEpisode`.
pub fn clip_window(
    episode: &Episode,
    video_start: NaiveDateTime,
    padding_seconds: f64,
) -> AppResult<ClipWindow> {
    let mut start_seconds = seconds_between(video_start, episode.start()) - padding_seconds;
    let mut duration_seconds =
        seconds_between(episode.start(), episode.end()) + 2.0 * padding_seconds;

    if start_seconds < 0.0 {
        duration_seconds += start_seconds;
        start_seconds = 0.0;
    }

    if duration_seconds <= 0.0 {
        return Err(AppError::PreVideoEpisode);
    }

    Ok(ClipWindow {
        start_seconds,
        duration_seconds,
    })
}
