//! wellnest - Terminal mood and wellness tracker
//!
//! Keeps a daily mood log and a wellness log (water, meals, sleep, workouts,
//! stretches, weight) as versioned JSON state under a `.wellnest/` data
//! directory, plus countdown sessions for breathing, stretching and workouts.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::WellnessError;
