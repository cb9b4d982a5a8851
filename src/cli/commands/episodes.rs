use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouping::group_episodes;
use crate::core::window::clip_window;
use crate::errors::{AppError, AppResult};
use crate::session::load_log;
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;
use crate::utils::time::parse_timestamp_arg;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Episodes {
        log,
        group_seconds,
        video_start,
        padding,
    } = cmd
    {
        let loaded = load_log(Path::new(log))?;
        if loaded.dropped_rows > 0 {
            warning(format!(
                "Dropped {} row(s) with unparseable timestamps",
                loaded.dropped_rows
            ));
        }

        let incidents: Vec<_> = loaded
            .records
            .into_iter()
            .filter(|r| r.kind.is_incident())
            .collect();

        if incidents.is_empty() {
            success("No Drowsy, Distracted, or Yawning events found in this session! 👍");
            return Ok(());
        }

        let threshold = group_seconds.unwrap_or(cfg.group_seconds);
        let episodes = group_episodes(&incidents, threshold);

        println!(
            "Detected {} grouped event episode(s) for this session.\n",
            episodes.len()
        );

        let video_start = video_start
            .as_ref()
            .map(|ts| parse_timestamp_arg(ts))
            .transpose()?;
        let pad = padding.unwrap_or(cfg.clip_padding_seconds);

        let mut table = if video_start.is_some() {
            Table::new(&["#", "Start", "End", "Events", "Kinds", "Clip window"])
        } else {
            Table::new(&["#", "Start", "End", "Events", "Kinds"])
        };

        for (idx, ep) in episodes.iter().enumerate() {
            let mut row = vec![
                (idx + 1).to_string(),
                ep.start().format("%Y-%m-%d %H:%M:%S").to_string(),
                ep.end().format("%H:%M:%S").to_string(),
                ep.len().to_string(),
                ep.kinds().join(", "),
            ];

            if let Some(vs) = video_start {
                let window = match clip_window(ep, vs, pad) {
                    Ok(w) => format!("{:.1}s +{:.1}s", w.start_seconds, w.duration_seconds),
                    Err(AppError::PreVideoEpisode) => "pre-video".to_string(),
                    Err(e) => return Err(e),
                };
                row.push(window);
            }

            table.add_row(row);
        }

        print!("{}", table.render());
    }
    Ok(())
}
