//! Initialize data directory use case

use crate::domain::{MoodState, WellnessState};
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, Persisted, StateRepository};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Initialize a new data directory at the specified path.
///
/// Both stores are written right away so the seeded routines keep the same
/// ids from the first command on.
pub fn init(path: &Path, today: NaiveDate) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    repo.save_state(&MoodState::initial(today))?;
    repo.save_state(&WellnessState::initial(today))?;

    tracing::info!(root = %path.display(), "initialized data directory");

    println!("Initialized wellnest at {}", path.display());
    println!("Starter routines: Quick Full Body, Morning Stretch");

    Ok(())
}
