use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with default thresholds
///  - the clips output directory
pub fn handle() -> AppResult<()> {
    println!("⚙️  Initializing drivescope…");

    Config::init_all()?;

    let cfg = Config::load();
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🎬 Clips dir   : {}", cfg.clips_dir);

    println!("🎉 drivescope initialization completed!");
    Ok(())
}
