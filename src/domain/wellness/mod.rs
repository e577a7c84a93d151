//! Wellness store: water, meals, sleep, workouts, stretches and weight
//! under one persisted state container.

mod fitness;
mod meal;
mod sleep;
mod stretch;
mod water;
mod weight;

pub use fitness::{Exercise, WorkoutRoutine};
pub use meal::{Meal, MealType};
pub use sleep::{hours_slept, SleepEntry, SleepEntryPatch};
pub use stretch::{reorder_exercises, StretchExercise, StretchRoutine};
pub use water::{WaterIntake, DEFAULT_WATER_GOAL};
pub use weight::{WeightEntry, WeightEntryPatch};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every wellness sub-domain. Mutated only through the operations defined
/// alongside each sub-domain's types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WellnessState {
    pub water_intake: Vec<WaterIntake>,
    pub water_goal: u32,
    pub meals: Vec<Meal>,
    pub sleep_entries: Vec<SleepEntry>,
    pub workout_routines: Vec<WorkoutRoutine>,
    pub active_workout_id: Option<String>,
    pub stretch_routines: Vec<StretchRoutine>,
    pub active_stretch_routine_id: Option<String>,
    pub weight_entries: Vec<WeightEntry>,
}

impl WellnessState {
    /// A fresh store seeded with the starter workout and stretch routines
    pub fn new(today: NaiveDate) -> Self {
        let mut state = WellnessState::empty();
        state.add_workout_routine(WorkoutRoutine::quick_full_body(today));
        state.add_stretch_routine(StretchRoutine::morning_stretch());
        state
    }

    /// A store with no records and the default water goal
    pub fn empty() -> Self {
        WellnessState {
            water_intake: Vec::new(),
            water_goal: DEFAULT_WATER_GOAL,
            meals: Vec::new(),
            sleep_entries: Vec::new(),
            workout_routines: Vec::new(),
            active_workout_id: None,
            stretch_routines: Vec::new(),
            active_stretch_routine_id: None,
            weight_entries: Vec::new(),
        }
    }
}

impl Default for WellnessState {
    fn default() -> Self {
        WellnessState::empty()
    }
}
