use chrono::NaiveDateTime;
use drivescope::errors::{AppError, AppResult};
use drivescope::models::{Episode, EventKind, EventRecord};
use drivescope::video::{ClipExtractor, ClipOutcome, clips::clip_name, extract_all};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

fn at(secs: i64) -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2025-03-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
        + chrono::Duration::seconds(secs)
}

fn episode(start_secs: i64, end_secs: i64) -> Episode {
    Episode::new(vec![
        EventRecord::new(at(start_secs), EventKind::Drowsy),
        EventRecord::new(at(end_secs), EventKind::Drowsy),
    ])
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{name}_drivescope_extract"));
    fs::remove_dir_all(&dir).ok();
    dir
}

/// In-memory extractor: counts backend invocations and writes a stub
/// file so the idempotency check sees a real artifact.
struct FakeExtractor {
    calls: Cell<usize>,
    fail_on_call: Option<usize>,
}

impl FakeExtractor {
    fn new() -> Self {
        Self {
            calls: Cell::new(0),
            fail_on_call: None,
        }
    }

    fn failing_on(call: usize) -> Self {
        Self {
            calls: Cell::new(0),
            fail_on_call: Some(call),
        }
    }
}

impl ClipExtractor for FakeExtractor {
    fn extract(&self, _source: &Path, dest: &Path, _start: f64, _duration: f64) -> AppResult<()> {
        let call = self.calls.get() + 1;
        self.calls.set(call);

        if self.fail_on_call == Some(call) {
            return Err(AppError::Extraction("simulated tool failure".to_string()));
        }

        fs::write(dest, b"clip").map_err(AppError::from)
    }
}

#[test]
fn test_clip_names_are_unique_per_episode() {
    let video = Path::new("/videos/morning_run.mp4");
    assert_eq!(clip_name(video, 1), "morning_run_ep1.mp4");
    assert_eq!(clip_name(video, 2), "morning_run_ep2.mp4");
}

#[test]
fn test_second_run_reuses_existing_clips() {
    let dir = temp_dir("reuse");
    let episodes = vec![episode(100, 110), episode(200, 210)];
    let extractor = FakeExtractor::new();

    let first = extract_all(
        &extractor,
        &episodes,
        Path::new("session.mp4"),
        at(0),
        3.0,
        &dir,
    )
    .unwrap();

    assert!(first.iter().all(|r| r.outcome == ClipOutcome::Created));
    assert_eq!(extractor.calls.get(), 2);

    let second = extract_all(
        &extractor,
        &episodes,
        Path::new("session.mp4"),
        at(0),
        3.0,
        &dir,
    )
    .unwrap();

    // No further backend calls: both clips already exist on disk.
    assert!(second.iter().all(|r| r.outcome == ClipOutcome::Reused));
    assert_eq!(extractor.calls.get(), 2);
}

#[test]
fn test_one_failure_does_not_abort_the_batch() {
    let dir = temp_dir("isolated_failure");
    let episodes = vec![episode(100, 110), episode(200, 210), episode(300, 310)];
    let extractor = FakeExtractor::failing_on(2);

    let reports = extract_all(
        &extractor,
        &episodes,
        Path::new("session.mp4"),
        at(0),
        3.0,
        &dir,
    )
    .unwrap();

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].outcome, ClipOutcome::Created);
    assert!(matches!(reports[1].outcome, ClipOutcome::Failed(_)));
    assert_eq!(reports[2].outcome, ClipOutcome::Created);
}

#[test]
fn test_pre_video_episode_is_skipped() {
    let dir = temp_dir("pre_video");
    let video_start = at(500);
    let episodes = vec![episode(100, 110), episode(600, 610)];
    let extractor = FakeExtractor::new();

    let reports = extract_all(
        &extractor,
        &episodes,
        Path::new("session.mp4"),
        video_start,
        3.0,
        &dir,
    )
    .unwrap();

    assert_eq!(reports[0].outcome, ClipOutcome::SkippedPreVideo);
    assert_eq!(reports[1].outcome, ClipOutcome::Created);
    // Only the extractable episode reached the backend.
    assert_eq!(extractor.calls.get(), 1);
}
