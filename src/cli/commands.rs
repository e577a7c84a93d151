//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wellnest")]
#[command(about = "Terminal mood and wellness tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new data directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Summary of today across every tracker
    Status,

    /// Log and review moods
    Mood {
        #[command(subcommand)]
        action: MoodCommand,
    },

    /// Count cups of water
    Water {
        #[command(subcommand)]
        action: WaterCommand,
    },

    /// Log meals and calories
    Meal {
        #[command(subcommand)]
        action: MealCommand,
    },

    /// Log sleep
    Sleep {
        #[command(subcommand)]
        action: SleepCommand,
    },

    /// Workout routines and exercise timers
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Stretch routines
    Stretch {
        #[command(subcommand)]
        action: StretchCommand,
    },

    /// Track body weight
    Weight {
        #[command(subcommand)]
        action: WeightCommand,
    },

    /// Guided 4-7-8 breathing session
    Breathe,

    /// Ask the wellness coach
    Coach {
        /// Message to send
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MoodCommand {
    /// Record today's mood (replaces an earlier entry for the same day)
    Log {
        /// great, good, neutral, down or sad (or the matching emoji)
        mood: String,

        /// Fine-tuned level from 1 to 10
        #[arg(long, default_value = "5")]
        level: String,

        #[arg(long, default_value = "")]
        note: String,

        /// Activity tag; repeat for several
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Show today's entry
    Today,

    /// Mood per day over a week or a month
    Chart {
        /// week or month (default from config)
        #[arg(long)]
        range: Option<String>,
    },

    /// Every stored entry
    List,

    /// Suggested activity tags
    Tags,
}

#[derive(Subcommand, Debug)]
pub enum WaterCommand {
    /// Drink one cup
    Add,
    /// Take back one cup
    Remove,
    /// Clear today's count
    Reset,
    /// Show today's progress
    Status,
    /// Set the daily goal in cups
    Goal { cups: String },
}

#[derive(Subcommand, Debug)]
pub enum MealCommand {
    /// Log a meal eaten today
    Add {
        name: String,

        calories: String,

        /// HH:MM (default: now)
        #[arg(long)]
        time: Option<String>,

        /// breakfast, lunch, dinner or snack
        #[arg(long = "type", default_value = "breakfast")]
        meal_type: String,
    },

    /// Remove a meal
    Delete { id: String },

    /// Today's meals and total calories
    List,
}

#[derive(Subcommand, Debug)]
pub enum SleepCommand {
    /// Record a night of sleep
    Add {
        #[arg(long, default_value = "22:00")]
        bed: String,

        #[arg(long, default_value = "06:00")]
        wake: String,

        /// Night being logged (default: today)
        #[arg(long)]
        date: Option<String>,

        /// 1 (poor) to 5 (excellent)
        #[arg(long, default_value = "4")]
        quality: String,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Change fields of a stored entry
    Update {
        id: String,

        #[arg(long)]
        bed: Option<String>,

        #[arg(long)]
        wake: Option<String>,

        #[arg(long)]
        quality: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Entries from the last few days
    Recent {
        /// Window in days (default from config)
        #[arg(long)]
        days: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum WorkoutCommand {
    /// Show the current routine
    Show,

    /// Create a routine
    Add {
        name: String,

        /// NAME:SECONDS or NAME:SECONDS:SETS:REPS; repeat in order
        #[arg(long = "exercise", value_name = "EXERCISE", required = true)]
        exercises: Vec<String>,
    },

    /// Mark an exercise completed
    Done {
        exercise_id: String,

        /// Mark it not completed instead
        #[arg(long)]
        undo: bool,
    },

    /// Choose the routine to show, or `none` for the default choice
    Select { id: String },

    /// Count down one exercise
    Timer {
        exercise_id: String,

        /// Mark the exercise completed when the timer ends
        #[arg(long)]
        complete: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum StretchCommand {
    /// Show the current routine
    Show,

    /// Create a routine
    Add {
        name: String,

        /// NAME:SECONDS; repeat in order
        #[arg(long = "exercise", value_name = "EXERCISE", required = true)]
        exercises: Vec<String>,
    },

    /// Move an exercise to another exercise's position
    Move {
        exercise_id: String,
        target_id: String,
    },

    /// Choose the routine to show, or `none` for the first one
    Select { id: String },

    /// Run the current routine's exercises back to back
    Run,
}

#[derive(Subcommand, Debug)]
pub enum WeightCommand {
    /// Record today's weight in kilograms
    Add {
        kg: String,

        #[arg(long)]
        note: Option<String>,
    },

    /// Change a stored entry
    Edit {
        id: String,

        #[arg(long)]
        weight: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Remove an entry
    Delete { id: String },

    /// Entries from the last few days, newest first
    List {
        /// Window in days (default from config)
        #[arg(long)]
        days: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_today_after_subcommand() {
        let cli =
            Cli::try_parse_from(["wellnest", "water", "add", "--today", "2025-01-02"]).unwrap();
        assert_eq!(cli.today.as_deref(), Some("2025-01-02"));
        assert!(matches!(
            cli.command,
            Some(Commands::Water {
                action: WaterCommand::Add
            })
        ));
    }

    #[test]
    fn test_repeated_exercise_flags() {
        let cli = Cli::try_parse_from([
            "wellnest",
            "workout",
            "add",
            "Legs",
            "--exercise",
            "Squats:60:3:12",
            "--exercise",
            "Lunges:45",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Workout {
                action: WorkoutCommand::Add { name, exercises },
            }) => {
                assert_eq!(name, "Legs");
                assert_eq!(exercises.len(), 2);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }
}
