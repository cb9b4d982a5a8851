//! ffmpeg-backed clip extraction.

use crate::errors::{AppError, AppResult};
use crate::video::ClipExtractor;
use std::io;
use std::path::Path;
use std::process::Command;

/// Characters of ffmpeg stderr kept in a failure diagnostic.
const DIAGNOSTIC_LIMIT: usize = 200;

pub struct FfmpegExtractor {
    bin: String,
}

impl FfmpegExtractor {
    /// Probe `ffmpeg -version` and fail early when the tool is absent.
    /// A missing binary is fatal for every clip feature, unlike a
    /// per-clip extraction error.
    pub fn locate() -> AppResult<Self> {
        Self::with_binary("ffmpeg")
    }

    pub fn with_binary(bin: &str) -> AppResult<Self> {
        let probe = Command::new(bin).arg("-version").output();

        match probe {
            Ok(out) if out.status.success() => Ok(Self {
                bin: bin.to_string(),
            }),
            Ok(_) => Err(AppError::FfmpegNotFound),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(AppError::FfmpegNotFound),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

impl ClipExtractor for FfmpegExtractor {
    fn extract(
        &self,
        source: &Path,
        dest: &Path,
        start_seconds: f64,
        duration_seconds: f64,
    ) -> AppResult<()> {
        // -ss before -i: fast seek. Re-encode to H.264/AAC so the clips
        // stay playable in a browser regardless of the dashcam codec.
        let output = Command::new(&self.bin)
            .arg("-y")
            .args(["-ss", &start_seconds.to_string()])
            .arg("-i")
            .arg(source)
            .args(["-t", &duration_seconds.to_string()])
            .args(["-c:v", "libx264", "-c:a", "aac"])
            .args(["-preset", "fast"])
            .args(["-crf", "23"])
            .arg(dest)
            .output();

        match output {
            Ok(out) if out.status.success() => Ok(()),
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                let diag: String = stderr.chars().take(DIAGNOSTIC_LIMIT).collect();
                Err(AppError::Extraction(diag))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(AppError::FfmpegNotFound),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}
