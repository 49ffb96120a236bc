use crate::config::AppConfig;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed subscriber when logging is enabled. Nothing is
/// ever written to the console so log lines cannot break up the menu.
pub fn init(config: &AppConfig) -> Result<bool, anyhow::Error> {
    if !config.enable_logging {
        return Ok(false);
    }

    if let Some(parent) = config.log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logger init failed: {e}"))?;

    Ok(true)
}
