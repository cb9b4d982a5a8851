use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for drivescope
/// CLI application to review driver-monitoring sessions
#[derive(Parser)]
#[command(
    name = "drivescope",
    version = env!("CARGO_PKG_VERSION"),
    about = "Review driver-monitoring sessions: group incident episodes, extract video clips, and score driver alertness",
    long_about = None
)]
pub struct Cli {
    /// Override the clips output directory (useful for tests or custom layouts)
    #[arg(global = true, long = "out-dir")]
    pub out_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the clips directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List grouped incident episodes found in a session log
    Episodes {
        /// Session log file (CSV with Timestamp and Event columns)
        #[arg(long = "log", value_name = "FILE")]
        log: String,

        #[arg(
            long = "group-seconds",
            help = "Max gap in seconds between events of one episode"
        )]
        group_seconds: Option<f64>,

        /// Absolute start instant of the session video; when given, each
        /// episode's clip window is shown too
        #[arg(long = "video-start", value_name = "TIMESTAMP")]
        video_start: Option<String>,

        #[arg(
            long = "padding",
            help = "Seconds of video kept before and after each episode"
        )]
        padding: Option<f64>,
    },

    /// Extract one video clip per incident episode
    Clips {
        /// Session log file (CSV with Timestamp and Event columns)
        #[arg(long = "log", value_name = "FILE")]
        log: String,

        /// Session video file
        #[arg(long = "video", value_name = "FILE")]
        video: String,

        /// Absolute start instant of the video (e.g. "2025-03-01 08:00:00")
        #[arg(long = "video-start", value_name = "TIMESTAMP")]
        video_start: String,

        #[arg(
            long = "group-seconds",
            help = "Max gap in seconds between events of one episode"
        )]
        group_seconds: Option<f64>,

        #[arg(
            long = "padding",
            help = "Seconds of video kept before and after each episode"
        )]
        padding: Option<f64>,
    },

    /// Print the session summary, metrics, and driver score
    Summary {
        /// Session log file (CSV with Timestamp and Event columns)
        #[arg(long = "log", value_name = "FILE")]
        log: String,

        /// Session name used in reports (defaults to the log file stem)
        #[arg(long = "name")]
        name: Option<String>,

        /// Export the summary to FILE
        #[arg(long = "export", value_name = "FILE")]
        export: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
