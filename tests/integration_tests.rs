use predicates::str::contains;

mod common;
use common::{dsc, sample_session, write_log};

#[test]
fn test_episodes_lists_grouped_incidents() {
    let log = sample_session("episodes_list");

    dsc()
        .args(["episodes", "--log", &log])
        .assert()
        .success()
        .stdout(contains("Detected 2 grouped event episode(s)"))
        .stdout(contains("Drowsy, Yawning"))
        .stdout(contains("Distracted"));
}

#[test]
fn test_episodes_with_video_start_shows_windows() {
    let log = sample_session("episodes_windows");

    dsc()
        .args([
            "episodes",
            "--log",
            &log,
            "--video-start",
            "2025-03-01 08:00:00",
            "--padding",
            "3",
        ])
        .assert()
        .success()
        .stdout(contains("Clip window"))
        .stdout(contains("97.0s +11.0s"));
}

#[test]
fn test_episodes_threshold_override_merges_groups() {
    let log = sample_session("episodes_threshold");

    // 300s threshold swallows the 150s gap between the two episodes.
    dsc()
        .args(["episodes", "--log", &log, "--group-seconds", "300"])
        .assert()
        .success()
        .stdout(contains("Detected 1 grouped event episode(s)"));
}

#[test]
fn test_episodes_without_incidents_reports_clean_session() {
    let log = write_log(
        "episodes_clean",
        &[
            ("2025-03-01 08:00:00", "Awake"),
            ("2025-03-01 08:10:00", "Awake"),
        ],
    );

    dsc()
        .args(["episodes", "--log", &log])
        .assert()
        .success()
        .stdout(contains("No Drowsy, Distracted, or Yawning events"));
}

#[test]
fn test_summary_prints_metrics_and_score() {
    let log = sample_session("summary_metrics");

    dsc()
        .args(["summary", "--log", &log, "--name", "morning-drive"])
        .assert()
        .success()
        .stdout(contains("Session Summary: morning-drive"))
        .stdout(contains("Total Events (non-Awake): 3"))
        .stdout(contains("Drowsy Events:    1"))
        .stdout(contains("Driver Score"));
}

#[test]
fn test_summary_drops_unparseable_rows() {
    let log = write_log(
        "summary_bad_rows",
        &[
            ("2025-03-01 08:00:00", "Awake"),
            ("not-a-timestamp", "Drowsy"),
            ("2025-03-01 08:05:00", "Yawning"),
        ],
    );

    dsc()
        .args(["summary", "--log", &log])
        .assert()
        .success()
        .stdout(contains("Dropped 1 row(s)"));
}

#[test]
fn test_missing_event_column_is_an_input_error() {
    let log = common::temp_out("missing_column", "csv");
    std::fs::write(&log, "Timestamp,Label\n2025-03-01 08:00:00,Drowsy\n").unwrap();

    dsc()
        .args(["summary", "--log", &log])
        .assert()
        .failure()
        .stderr(contains("missing required column: Event"));
}

#[test]
fn test_log_with_no_valid_rows_is_an_input_error() {
    let log = write_log("all_rows_bad", &[("garbage", "Drowsy"), ("junk", "Awake")]);

    dsc()
        .args(["summary", "--log", &log])
        .assert()
        .failure()
        .stderr(contains("No valid rows"));
}

#[test]
fn test_invalid_video_start_is_rejected() {
    let log = sample_session("bad_video_start");

    dsc()
        .args([
            "episodes",
            "--log",
            &log,
            "--video-start",
            "yesterday-ish",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}
