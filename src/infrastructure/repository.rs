//! File system repository: data directory discovery and state blob storage

use crate::domain::{MoodState, WellnessState};
use crate::error::{Result, WellnessError};
use crate::infrastructure::config::{Config, DATA_DIR};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Layout version written into every state blob
pub const STORAGE_VERSION: u32 = 1;

/// State that is stored as one blob and replaced wholesale on every change
pub trait Persisted: Serialize + DeserializeOwned + Clone + PartialEq {
    /// Fixed storage name; the blob lives at `.wellnest/<name>.json`
    const STORAGE_NAME: &'static str;

    /// State used when nothing has been stored yet
    fn initial(today: NaiveDate) -> Self;
}

impl Persisted for MoodState {
    const STORAGE_NAME: &'static str = "mood-storage";

    fn initial(_today: NaiveDate) -> Self {
        MoodState::default()
    }
}

impl Persisted for WellnessState {
    const STORAGE_NAME: &'static str = "wellness-storage";

    fn initial(today: NaiveDate) -> Self {
        WellnessState::new(today)
    }
}

#[derive(Serialize)]
struct BlobOut<'a, S> {
    version: u32,
    state: &'a S,
}

#[derive(Deserialize)]
struct BlobIn<S> {
    version: u32,
    state: S,
}

/// Abstract repository for stored wellness data
pub trait StateRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .wellnest/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .wellnest/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .wellnest directory exists
    fn is_initialized(&self) -> bool;

    /// Create .wellnest directory structure
    fn initialize(&self) -> Result<()>;

    /// Load a state blob; `None` when it was never written
    fn load_state<S: Persisted>(&self) -> Result<Option<S>>;

    /// Overwrite a state blob
    fn save_state<S: Persisted>(&self, state: &S) -> Result<()>;
}

/// File system implementation of StateRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the data root by walking up from the current directory.
    /// WELLNEST_ROOT, when set, takes precedence over discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("WELLNEST_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(WellnessError::Config(format!(
                    "WELLNEST_ROOT is set to '{}' but no {} directory found. \
                    Run 'wellnest init' in that directory or unset WELLNEST_ROOT.",
                    path.display(),
                    DATA_DIR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the data root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(WellnessError::NotWellnessDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    /// Path of the blob for a given storage name
    pub fn state_path(&self, storage_name: &str) -> PathBuf {
        self.root.join(DATA_DIR).join(format!("{}.json", storage_name))
    }

    /// Write via a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        let tmp_name = format!(
            "{}.wellnest-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("state.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(WellnessError::Io(e));
        }
        Ok(())
    }
}

impl StateRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.root.join(DATA_DIR);

        if data_dir.exists() {
            return Err(WellnessError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        Ok(())
    }

    fn load_state<S: Persisted>(&self) -> Result<Option<S>> {
        let path = self.state_path(S::STORAGE_NAME);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(storage = S::STORAGE_NAME, "no stored state yet");
                return Ok(None);
            }
            Err(e) => return Err(WellnessError::Io(e)),
        };

        let blob: BlobIn<S> = serde_json::from_str(&contents)?;
        if blob.version > STORAGE_VERSION {
            return Err(WellnessError::UnsupportedStorageVersion {
                name: S::STORAGE_NAME.to_string(),
                found: blob.version,
                supported: STORAGE_VERSION,
            });
        }

        tracing::debug!(
            storage = S::STORAGE_NAME,
            version = blob.version,
            "state rehydrated"
        );
        Ok(Some(blob.state))
    }

    fn save_state<S: Persisted>(&self, state: &S) -> Result<()> {
        if !self.is_initialized() {
            return Err(WellnessError::NotWellnessDirectory(self.root.clone()));
        }

        let blob = BlobOut {
            version: STORAGE_VERSION,
            state,
        };
        let contents = serde_json::to_string_pretty(&blob)?;
        Self::write_atomic(&self.state_path(S::STORAGE_NAME), &contents)
    }
}
