#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dsc() -> Command {
    cargo_bin_cmd!("drivescope")
}

/// Create a unique output file path inside the system temp dir and remove
/// any leftover from a previous run
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_drivescope_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a unique clips directory inside the system temp dir
pub fn temp_clips_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_drivescope_clips", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_dir_all(&p).ok();
    p
}

/// Write a session log CSV with the standard Timestamp/Event header
pub fn write_log(name: &str, rows: &[(&str, &str)]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_drivescope_log.csv", name));

    let mut content = String::from("Timestamp,Event\n");
    for (ts, ev) in rows {
        content.push_str(&format!("{},{}\n", ts, ev));
    }

    fs::write(&path, content).expect("write test log");
    path.to_string_lossy().to_string()
}

/// A small session with two incident episodes and awake stretches
pub fn sample_session(name: &str) -> String {
    write_log(
        name,
        &[
            ("2025-03-01 08:00:00", "Awake"),
            ("2025-03-01 08:01:40", "Drowsy"),
            ("2025-03-01 08:01:45", "Yawning"),
            ("2025-03-01 08:02:30", "Awake"),
            ("2025-03-01 08:05:00", "Distracted"),
            ("2025-03-01 08:06:00", "Awake"),
        ],
    )
}
