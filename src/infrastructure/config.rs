//! Configuration management

use crate::domain::session::BreathingConfig;
use crate::domain::MoodRange;
use crate::error::{Result, WellnessError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the marker directory holding config and stored state
pub const DATA_DIR: &str = ".wellnest";

const DEFAULT_RECENT_DAYS: u32 = 7;

fn default_recent_days() -> u32 {
    DEFAULT_RECENT_DAYS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,
    /// Default window of `mood chart`
    #[serde(default)]
    pub mood_range: MoodRange,
    /// Default window of `sleep recent` and `weight list`
    #[serde(default = "default_recent_days")]
    pub recent_days: u32,
    #[serde(default)]
    pub breathing: BreathingConfig,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            mood_range: MoodRange::default(),
            recent_days: DEFAULT_RECENT_DAYS,
            breathing: BreathingConfig::default(),
        }
    }

    /// Load config from .wellnest/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WellnessError::NotWellnessDirectory(path.to_path_buf())
            } else {
                WellnessError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| WellnessError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .wellnest/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| WellnessError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
