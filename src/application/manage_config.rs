//! Config management use case

use crate::domain::MoodRange;
use crate::error::{Result, WellnessError};
use crate::infrastructure::{Config, FileSystemRepository, StateRepository};
use std::str::FromStr;

/// Keys accepted by `config <key> <value>`
pub const SETTABLE_KEYS: [&str; 7] = [
    "mood_range",
    "recent_days",
    "breathing.inhale",
    "breathing.hold",
    "breathing.exhale",
    "breathing.rest",
    "breathing.cycles",
];

fn unknown_key(key: &str) -> WellnessError {
    WellnessError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: created, {}",
        key,
        SETTABLE_KEYS.join(", ")
    ))
}

fn parse_positive(key: &str, value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(WellnessError::Config(format!(
            "Invalid value for {}: '{}'. Expected a positive whole number",
            key, value
        ))),
    }
}

/// Service for managing wellnest configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;
        entries(&config)
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| unknown_key(key))
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "mood_range" => {
                config.mood_range = MoodRange::from_str(value).map_err(WellnessError::Config)?;
            }
            "recent_days" => config.recent_days = parse_positive(key, value)?,
            "breathing.inhale" => config.breathing.inhale = parse_positive(key, value)?,
            "breathing.hold" => config.breathing.hold = parse_positive(key, value)?,
            "breathing.exhale" => config.breathing.exhale = parse_positive(key, value)?,
            "breathing.rest" => config.breathing.rest = parse_positive(key, value)?,
            "breathing.cycles" => config.breathing.cycles = parse_positive(key, value)?,
            "created" => {
                return Err(WellnessError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        tracing::debug!(key, value, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

/// Every key with its displayed value, in listing order
pub fn entries(config: &Config) -> Vec<(String, String)> {
    let b = &config.breathing;
    vec![
        ("mood_range".to_string(), config.mood_range.to_string()),
        ("recent_days".to_string(), config.recent_days.to_string()),
        ("breathing.inhale".to_string(), b.inhale.to_string()),
        ("breathing.hold".to_string(), b.hold.to_string()),
        ("breathing.exhale".to_string(), b.exhale.to_string()),
        ("breathing.rest".to_string(), b.rest.to_string()),
        ("breathing.cycles".to_string(), b.cycles.to_string()),
        ("created".to_string(), config.created.to_rfc3339()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_set_then_get_breathing_field() {
        let (_temp, service) = service();
        service.set("breathing.cycles", "5").unwrap();
        assert_eq!(service.get("breathing.cycles").unwrap(), "5");
        assert_eq!(service.list().unwrap().breathing.cycles, 5);
    }

    #[test]
    fn test_set_mood_range() {
        let (_temp, service) = service();
        service.set("mood_range", "month").unwrap();
        assert_eq!(service.get("mood_range").unwrap(), "month");
        assert!(service.set("mood_range", "year").is_err());
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        assert!(service.get("created").is_ok());
        match service.set("created", "2020-01-01T00:00:00Z").unwrap_err() {
            WellnessError::Config(msg) => assert!(msg.contains("read-only")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_and_unknown_keys() {
        let (_temp, service) = service();
        assert!(service.set("recent_days", "0").is_err());
        assert!(service.set("recent_days", "abc").is_err());
        match service.get("editor").unwrap_err() {
            WellnessError::Config(msg) => assert!(msg.contains("Unknown config key")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
