use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouping::group_episodes;
use crate::errors::AppResult;
use crate::session::load_log;
use crate::ui::messages::{error, info, success, warning};
use crate::utils::time::parse_timestamp_arg;
use crate::video::{ClipOutcome, FfmpegExtractor, extract_all};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clips {
        log,
        video,
        video_start,
        group_seconds,
        padding,
    } = cmd
    {
        // A missing tool is fatal for the whole command; check before
        // doing any work.
        let extractor = FfmpegExtractor::locate()?;

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
        let start = parse_timestamp_arg(video_start)?;
        let pad = padding.unwrap_or(cfg.clip_padding_seconds);

        info(format!(
            "Extracting {} clip(s) into {}",
            episodes.len(),
            cfg.clips_dir
        ));

        let reports = extract_all(
            &extractor,
            &episodes,
            Path::new(video),
            start,
            pad,
            Path::new(&cfg.clips_dir),
        )?;

        let mut extracted = 0;
        for report in &reports {
            match &report.outcome {
                ClipOutcome::Created => {
                    extracted += 1;
                    println!("🎬 Episode {}: {}", report.episode_index, report.path.display());
                }
                ClipOutcome::Reused => {
                    extracted += 1;
                    println!(
                        "🎬 Episode {}: {} (already extracted)",
                        report.episode_index,
                        report.path.display()
                    );
                }
                ClipOutcome::SkippedPreVideo => warning(format!(
                    "Episode {} ends before the video starts, skipped",
                    report.episode_index
                )),
                ClipOutcome::Failed(diag) => error(format!(
                    "Episode {} extraction failed: {}",
                    report.episode_index, diag
                )),
            }
        }

        success(format!(
            "Processing complete: {}/{} clip(s) available",
            extracted,
            reports.len()
        ));
    }
    Ok(())
}
