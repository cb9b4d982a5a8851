use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::summarize;
use crate::errors::{AppError, AppResult};
use crate::export::{SummaryRow, export_summary};
use crate::session::{load_log, session_name};
use crate::ui::messages::{header, score_line, warning};
use crate::utils::table::Table;
use std::io;
use std::path::Path;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        log,
        name,
        export,
        format,
        force,
    } = cmd
    {
        let log_path = Path::new(log);
        let loaded = load_log(log_path)?;
        if loaded.dropped_rows > 0 {
            warning(format!(
                "Dropped {} row(s) with unparseable timestamps",
                loaded.dropped_rows
            ));
        }

        // The session spans the whole log, baseline rows included.
        let records = loaded.records;
        let session_start = records[0].timestamp;
        let session_end = records[records.len() - 1].timestamp;

        let summary = summarize(&records, session_start, session_end);
        let display_name = name.clone().unwrap_or_else(|| session_name(log_path));

        header(format!("Session Summary: {display_name}"));
        println!("Total Events (non-Awake): {}", summary.total_incidents);
        println!("Session Duration (min):   {:.1}", summary.duration_minutes);
        println!("Distinct Event Types:     {}", summary.kind_counts.len());

        if summary.kind_counts.is_empty() {
            println!("\nNo Drowsy, Distracted, or Yawning events found.");
        } else {
            header("Event Breakdown");
            let mut table = Table::new(&["Event", "Count"]);
            for (kind, count) in &summary.kind_counts {
                table.add_row(vec![kind.clone(), count.to_string()]);
            }
            print!("{}", table.render());
        }

        header("Detailed Metrics");
        println!("- Drowsy Events:    {}", summary.drowsy_count);
        println!("- Yawns Detected:   {}", summary.yawn_count);
        println!("- Distractions:     {}", summary.distracted_count);
        println!("- Events per Minute: {:.2}", summary.events_per_minute);
        println!(
            "- Longest Awake Period: {:.2} minutes",
            summary.longest_awake_minutes
        );
        println!(
            "- Total Time in Non-Awake State: {:.2} minutes",
            summary.total_non_awake_seconds / 60.0
        );
        println!("- Session Start: {}", summary.session_start);
        println!("- Session End:   {}", summary.session_end);

        println!();
        score_line(summary.score, summary.rating());

        if let Some(file) = export {
            let path = Path::new(file);
            if !path.is_absolute() {
                return Err(AppError::from(io::Error::other(format!(
                    "Output file path must be absolute: {file}"
                ))));
            }

            let row = SummaryRow::from_summary(&display_name, &summary);
            export_summary(&row, format, path, *force)?;
        }
    }
    Ok(())
}
