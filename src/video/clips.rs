//! Per-episode clip planning and idempotent batch extraction.

use crate::core::window::clip_window;
use crate::errors::{AppError, AppResult};
use crate::models::Episode;
use crate::video::ClipExtractor;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum ClipOutcome {
    /// The backend was invoked and the clip was written.
    Created,
    /// The clip already existed; the backend was not invoked.
    Reused,
    /// The padded window ends before the video starts.
    SkippedPreVideo,
    /// The backend failed; the diagnostic is kept for reporting.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ClipReport {
    /// 1-based episode index, also part of the clip file name.
    pub episode_index: usize,
    pub path: PathBuf,
    pub outcome: ClipOutcome,
}

/// Deterministic clip name, unique per (source video, episode index).
pub fn clip_name(video: &Path, episode_index: usize) -> String {
    let stem = video
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "video".to_string());
    format!("{stem}_ep{episode_index}.mp4")
}

/// Extract one clip per episode into `out_dir`, creating it on demand.
///
/// Extraction failures and pre-video episodes are localized: the episode
/// is reported and the batch continues. Existing destination files are
/// reused without re-invoking the backend, so repeated runs over the same
/// session are cheap.
pub fn extract_all<E: ClipExtractor>(
    extractor: &E,
    episodes: &[Episode],
    video: &Path,
    video_start: NaiveDateTime,
    padding_seconds: f64,
    out_dir: &Path,
) -> AppResult<Vec<ClipReport>> {
    fs::create_dir_all(out_dir)?;

    let mut reports = Vec::new();

    for (idx, episode) in episodes.iter().enumerate() {
        let episode_index = idx + 1;
        let path = out_dir.join(clip_name(video, episode_index));

        let outcome = if path.exists() {
            ClipOutcome::Reused
        } else {
            match clip_window(episode, video_start, padding_seconds) {
                Err(AppError::PreVideoEpisode) => ClipOutcome::SkippedPreVideo,
                Err(e) => return Err(e),
                Ok(window) => {
                    match extractor.extract(
                        video,
                        &path,
                        window.start_seconds,
                        window.duration_seconds,
                    ) {
                        Ok(()) => ClipOutcome::Created,
                        Err(AppError::Extraction(diag)) => ClipOutcome::Failed(diag),
                        // Tool-missing and I/O errors abort the batch.
                        Err(e) => return Err(e),
                    }
                }
            }
        };

        reports.push(ClipReport {
            episode_index,
            path,
            outcome,
        });
    }

    Ok(reports)
}
