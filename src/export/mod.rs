// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use model::SummaryRow;

use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Write a summary row to `path` in the requested format.
pub fn export_summary(
    row: &SummaryRow,
    format: &ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => json_csv::export_csv(row, path),
        ExportFormat::Json => json_csv::export_json(row, path),
    }
}
