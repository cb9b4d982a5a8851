use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Maximum gap (seconds) between two incident events that still
    /// belong to the same episode.
    #[serde(default = "default_group_seconds")]
    pub group_seconds: f64,
    /// Seconds of video kept before and after each episode.
    #[serde(default = "default_clip_padding")]
    pub clip_padding_seconds: f64,
    /// Directory where extracted clips are written.
    #[serde(default = "default_clips_dir")]
    pub clips_dir: String,
}

fn default_group_seconds() -> f64 {
    10.0
}
fn default_clip_padding() -> f64 {
    3.0
}
fn default_clips_dir() -> String {
    "clips".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_seconds: default_group_seconds(),
            clip_padding_seconds: default_clip_padding(),
            clips_dir: default_clips_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."));
            appdata.join("drivescope")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".drivescope")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("drivescope.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_yaml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file and the clips directory
    pub fn init_all() -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        fs::create_dir_all(&config.clips_dir)?;

        Ok(())
    }

    pub fn print(&self) -> AppResult<()> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            println!("{content}");
        } else {
            let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigLoad)?;
            println!("# (defaults, no config file found at {})", path.display());
            println!("{yaml}");
        }
        Ok(())
    }
}
