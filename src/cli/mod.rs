//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod validate;

pub use commands::{
    Cli, Commands, MealCommand, MoodCommand, SleepCommand, StretchCommand, WaterCommand,
    WeightCommand, WorkoutCommand,
};
