//! Error types for wellnest

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wellnest
#[derive(Debug, Error)]
pub enum WellnessError {
    #[error("Not a wellnest directory: {0}")]
    NotWellnessDirectory(PathBuf),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{name} was written by a newer version (storage v{found}, supported v{supported})")]
    UnsupportedStorageVersion {
        name: String,
        found: u32,
        supported: u32,
    },

    #[error(transparent)]
    Coach(#[from] CoachError),
}

/// Rejected user input, caught before any store operation runs
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("{field} must be a number, got '{value}'")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: f64,
        max: f64,
    },

    #[error("Wake time must be after bed time (bed {bed_time}, wake {wake_time})")]
    NonPositiveDuration { bed_time: String, wake_time: String },

    #[error("Invalid date: '{value}'")]
    InvalidDate { value: String },

    #[error("Invalid time: '{value}'")]
    InvalidTime { value: String },

    #[error("{0}")]
    InvalidChoice(String),
}

/// Failures of the coach chat; never affect stored state
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("No completion backend configured for the coach")]
    MissingCredential,

    #[error("Coach request failed: {0}")]
    RequestFailed(String),
}

impl WellnessError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WellnessError::NotWellnessDirectory(_) => 2,
            WellnessError::Validation(_) => 3,
            WellnessError::NotFound { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WellnessError::NotWellnessDirectory(path) => {
                format!(
                    "Not a wellnest directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'wellnest init' in this directory to start tracking\n\
                    • Navigate to an existing wellnest directory\n\
                    • Set WELLNEST_ROOT environment variable to your data directory",
                    path.display()
                )
            }
            WellnessError::Validation(ValidationError::InvalidDate { value }) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: wellnest sleep add --date 2025-01-17 --bed 22:30 --wake 06:45",
                    value
                )
            }
            WellnessError::Validation(ValidationError::InvalidTime { value }) => {
                format!(
                    "Invalid time: '{}'\n\n\
                    Expected format: HH:MM (24-hour)\n\
                    Example: --bed 22:30",
                    value
                )
            }
            WellnessError::Validation(ValidationError::NonPositiveDuration { .. }) => {
                format!(
                    "{}\n\n\
                    Bed and wake time must differ; a wake time earlier than the bed time\n\
                    counts as the next morning.",
                    self
                )
            }
            WellnessError::NotFound { kind, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • List ids with 'wellnest {}'",
                    self,
                    listing_command(kind)
                )
            }
            WellnessError::Coach(CoachError::MissingCredential) => {
                "The coach has no canned reply for that and no completion backend is configured.\n\n\
                Try a greeting such as 'hello', or ask about your own data with 'wellnest status'."
                    .to_string()
            }
            WellnessError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: wellnest config breathing.cycles 5",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Command that prints the ids of a record kind
fn listing_command(kind: &str) -> &'static str {
    match kind {
        "meal" => "meal list",
        "sleep entry" => "sleep recent --days 365",
        "weight entry" => "weight list --days 365",
        "stretch exercise" | "stretch routine" => "stretch show",
        _ => "workout show",
    }
}

/// Result type using WellnessError
pub type Result<T> = std::result::Result<T, WellnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_wellness_directory_suggestion() {
        let err = WellnessError::NotWellnessDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("wellnest init"));
        assert!(msg.contains("WELLNEST_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            WellnessError::NotWellnessDirectory(PathBuf::from("/x")).exit_code(),
            2
        );
        assert_eq!(
            WellnessError::from(ValidationError::MissingField("name")).exit_code(),
            3
        );
        assert_eq!(
            WellnessError::NotFound {
                kind: "meal",
                id: "abc".to_string()
            }
            .exit_code(),
            4
        );
        assert_eq!(WellnessError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::NotNumeric {
            field: "calories",
            value: "lots".to_string(),
        };
        assert_eq!(err.to_string(), "calories must be a number, got 'lots'");

        let err = ValidationError::OutOfRange {
            field: "quality",
            value: "9".to_string(),
            min: 1.0,
            max: 5.0,
        };
        assert_eq!(err.to_string(), "quality must be between 1 and 5, got 9");
    }

    #[test]
    fn test_invalid_date_suggestions() {
        let err = WellnessError::from(ValidationError::InvalidDate {
            value: "17-01-2025".to_string(),
        });
        let msg = err.display_with_suggestions();
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("17-01-2025"));
    }

    #[test]
    fn test_not_found_points_to_listing() {
        let err = WellnessError::NotFound {
            kind: "weight entry",
            id: "zz".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("No weight entry with id 'zz'"));
        assert!(msg.contains("wellnest weight list"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = WellnessError::Config("broken".to_string());
        assert_eq!(err.display_with_suggestions(), "broken");
    }
}
