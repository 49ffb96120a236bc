use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "./config.json";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub enable_logging: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_path() -> PathBuf {
    PathBuf::from("./data/pit-log.log")
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_logging: false,
            log_level: default_log_level(),
            log_path: default_log_path(),
            show_banner: true,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// A missing file means defaults; nothing is written back.
    pub fn load_from(config_path: &Path) -> Result<Self, anyhow::Error> {
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(config_path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
