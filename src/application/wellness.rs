//! Wellness tracking use cases: water, meals, sleep, workouts, stretches, weight

use crate::application::store::Store;
use crate::domain::wellness::{
    hours_slept, reorder_exercises, Meal, SleepEntry, SleepEntryPatch, StretchRoutine,
    WaterIntake, WeightEntry, WeightEntryPatch, WorkoutRoutine,
};
use crate::domain::{TimeOfDay, WellnessState};
use crate::error::{Result, ValidationError, WellnessError};
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Service over the persisted wellness store.
///
/// Id-based operations report an unknown id as [`WellnessError::NotFound`]
/// instead of silently doing nothing.
pub struct WellnessService {
    store: Store<WellnessState>,
    today: NaiveDate,
}

fn not_found(kind: &'static str, id: &str) -> WellnessError {
    WellnessError::NotFound {
        kind,
        id: id.to_string(),
    }
}

impl WellnessService {
    pub fn open(repository: FileSystemRepository, today: NaiveDate) -> Result<Self> {
        Ok(WellnessService {
            store: Store::open(repository, today)?,
            today,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn state(&self) -> &WellnessState {
        self.store.state()
    }

    // Water

    pub fn add_water_cup(&mut self) -> Result<WaterIntake> {
        let today = self.today;
        self.store
            .commit("add_water_cup", |s| s.add_water_cup(today))?;
        Ok(self.water())
    }

    pub fn remove_water_cup(&mut self) -> Result<WaterIntake> {
        let today = self.today;
        self.store
            .commit("remove_water_cup", |s| s.remove_water_cup(today))?;
        Ok(self.water())
    }

    pub fn set_water_goal(&mut self, goal: u32) -> Result<WaterIntake> {
        let today = self.today;
        self.store
            .commit("set_water_goal", |s| s.set_water_goal(goal, today))?;
        Ok(self.water())
    }

    pub fn reset_water_intake(&mut self) -> Result<WaterIntake> {
        let today = self.today;
        self.store
            .commit("reset_water_intake", |s| s.reset_water_intake(today))?;
        Ok(self.water())
    }

    pub fn water(&self) -> WaterIntake {
        self.state().today_water_intake(self.today)
    }

    // Meals

    pub fn add_meal(&mut self, meal: Meal) -> Result<String> {
        self.store.commit("add_meal", |s| s.add_meal(meal))
    }

    pub fn delete_meal(&mut self, id: &str) -> Result<()> {
        if self.store.commit("delete_meal", |s| s.delete_meal(id))? {
            Ok(())
        } else {
            Err(not_found("meal", id))
        }
    }

    pub fn today_meals(&self) -> Vec<&Meal> {
        self.state().today_meals(self.today)
    }

    pub fn today_calories(&self) -> f64 {
        self.state().today_calories(self.today)
    }

    // Sleep

    pub fn add_sleep_entry(&mut self, entry: SleepEntry) -> Result<String> {
        self.store
            .commit("add_sleep_entry", |s| s.add_sleep_entry(entry))
    }

    /// Merge a patch into a stored entry. When either time changes, the
    /// duration is recomputed from the merged bed and wake times.
    pub fn update_sleep_entry(&mut self, id: &str, mut patch: SleepEntryPatch) -> Result<()> {
        let existing = self
            .state()
            .sleep_entry(id)
            .ok_or_else(|| not_found("sleep entry", id))?;

        if patch.bed_time.is_some() || patch.wake_time.is_some() {
            let bed = patch.bed_time.unwrap_or(existing.bed_time);
            let wake = patch.wake_time.unwrap_or(existing.wake_time);
            patch.hours_slept = Some(positive_sleep(bed, wake)?);
        }

        if self
            .store
            .commit("update_sleep_entry", |s| s.update_sleep_entry(id, patch))?
        {
            Ok(())
        } else {
            Err(not_found("sleep entry", id))
        }
    }

    pub fn recent_sleep_entries(&self, days: u32) -> Vec<SleepEntry> {
        self.state().recent_sleep_entries(self.today, days)
    }

    // Fitness

    pub fn add_workout_routine(&mut self, routine: WorkoutRoutine) -> Result<String> {
        self.store
            .commit("add_workout_routine", |s| s.add_workout_routine(routine))
    }

    /// Mark an exercise done (or not) in whichever routine holds it.
    /// Returns the routine after the change.
    pub fn set_exercise_completed(
        &mut self,
        exercise_id: &str,
        completed: bool,
    ) -> Result<WorkoutRoutine> {
        let routine_id = self
            .state()
            .workout_for_exercise(exercise_id)
            .map(|r| r.id.clone())
            .ok_or_else(|| not_found("exercise", exercise_id))?;

        self.store.commit("update_exercise_status", |s| {
            s.update_exercise_status(&routine_id, exercise_id, completed)
        })?;

        self.state()
            .workout_routines
            .iter()
            .find(|r| r.id == routine_id)
            .cloned()
            .ok_or_else(|| not_found("workout routine", &routine_id))
    }

    pub fn select_workout(&mut self, id: Option<String>) -> Result<()> {
        if let Some(id) = &id {
            if !self.state().workout_routines.iter().any(|r| &r.id == id) {
                return Err(not_found("workout routine", id));
            }
        }
        self.store
            .commit("set_active_workout", |s| s.set_active_workout(id))
    }

    pub fn current_workout(&self) -> Option<&WorkoutRoutine> {
        self.state().current_workout()
    }

    // Stretch

    pub fn add_stretch_routine(&mut self, routine: StretchRoutine) -> Result<String> {
        self.store
            .commit("add_stretch_routine", |s| s.add_stretch_routine(routine))
    }

    /// Move one exercise onto another's position within their routine
    pub fn move_stretch_exercise(&mut self, dragged_id: &str, target_id: &str) -> Result<StretchRoutine> {
        let routine = self
            .state()
            .stretch_routines
            .iter()
            .find(|r| r.exercises.iter().any(|e| e.id == dragged_id))
            .ok_or_else(|| not_found("stretch exercise", dragged_id))?;

        let reordered = reorder_exercises(&routine.sorted_exercises(), dragged_id, target_id)
            .ok_or_else(|| not_found("stretch exercise", target_id))?;
        let routine_id = routine.id.clone();

        self.store.commit("update_stretch_exercise_order", |s| {
            s.update_stretch_exercise_order(&routine_id, reordered)
        })?;

        self.state()
            .stretch_routines
            .iter()
            .find(|r| r.id == routine_id)
            .cloned()
            .ok_or_else(|| not_found("stretch routine", &routine_id))
    }

    pub fn select_stretch_routine(&mut self, id: Option<String>) -> Result<()> {
        if let Some(id) = &id {
            if !self.state().stretch_routines.iter().any(|r| &r.id == id) {
                return Err(not_found("stretch routine", id));
            }
        }
        self.store
            .commit("set_active_stretch_routine", |s| s.set_active_stretch_routine(id))
    }

    pub fn current_stretch_routine(&self) -> Option<&StretchRoutine> {
        self.state().current_stretch_routine()
    }

    // Weight

    pub fn add_weight_entry(&mut self, entry: WeightEntry) -> Result<String> {
        self.store
            .commit("add_weight_entry", |s| s.add_weight_entry(entry))
    }

    pub fn update_weight_entry(&mut self, id: &str, patch: WeightEntryPatch) -> Result<()> {
        if self
            .store
            .commit("update_weight_entry", |s| s.update_weight_entry(id, patch))?
        {
            Ok(())
        } else {
            Err(not_found("weight entry", id))
        }
    }

    pub fn delete_weight_entry(&mut self, id: &str) -> Result<()> {
        if self
            .store
            .commit("delete_weight_entry", |s| s.delete_weight_entry(id))?
        {
            Ok(())
        } else {
            Err(not_found("weight entry", id))
        }
    }

    pub fn recent_weight_entries(&self, days: u32) -> Vec<WeightEntry> {
        self.state().recent_weight_entries(self.today, days)
    }
}

/// Hours between bed and wake; a zero-length night is rejected
pub fn positive_sleep(bed: TimeOfDay, wake: TimeOfDay) -> Result<f64> {
    let hours = hours_slept(bed, wake);
    if hours <= 0.0 {
        return Err(ValidationError::NonPositiveDuration {
            bed_time: bed.to_string(),
            wake_time: wake.to_string(),
        }
        .into());
    }
    Ok(hours)
}
