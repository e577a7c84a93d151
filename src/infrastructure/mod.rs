//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::{Config, DATA_DIR};
pub use repository::{FileSystemRepository, Persisted, StateRepository, STORAGE_VERSION};
