pub mod clips;
pub mod ffmpeg;

use crate::errors::AppResult;
use std::path::Path;

/// Capability interface over the external extraction tool.
///
/// The core never depends on a specific binary; any backend that can cut
/// `[start, start + duration)` out of `source` into `dest` is
/// substitutable (tests use an in-memory fake).
pub trait ClipExtractor {
    fn extract(
        &self,
        source: &Path,
        dest: &Path,
        start_seconds: f64,
        duration_seconds: f64,
    ) -> AppResult<()>;
}

pub use clips::{ClipOutcome, ClipReport, extract_all};
pub use ffmpeg::FfmpegExtractor;
