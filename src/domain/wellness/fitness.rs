//! Workout routines

use super::WellnessState;
use crate::domain::id::generate_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// Seconds
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    pub completed: bool,
    pub order: usize,
}

impl Exercise {
    pub fn new(name: impl Into<String>, duration: u32, order: usize) -> Self {
        Exercise {
            id: generate_id(),
            name: name.into(),
            duration,
            sets: None,
            reps: None,
            completed: false,
            order,
        }
    }

    pub fn with_sets(mut self, sets: u32, reps: u32) -> Self {
        self.sets = Some(sets);
        self.reps = Some(reps);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRoutine {
    pub id: String,
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub date: NaiveDate,
    /// Derived from the exercises; see [`WorkoutRoutine::refresh_completed`]
    pub completed: bool,
}

impl WorkoutRoutine {
    pub fn new(name: impl Into<String>, date: NaiveDate, exercises: Vec<Exercise>) -> Self {
        let mut routine = WorkoutRoutine {
            id: generate_id(),
            name: name.into(),
            exercises,
            date,
            completed: false,
        };
        routine.refresh_completed();
        routine
    }

    /// The starter routine seeded into a fresh store
    pub fn quick_full_body(date: NaiveDate) -> Self {
        WorkoutRoutine::new(
            "Quick Full Body",
            date,
            vec![
                Exercise::new("Push-ups", 60, 0).with_sets(3, 10),
                Exercise::new("Squats", 60, 1).with_sets(3, 15),
                Exercise::new("Plank", 30, 2),
                Exercise::new("Jumping Jacks", 60, 3),
            ],
        )
    }

    // An empty routine counts as completed, same as `all` on an empty list.
    fn refresh_completed(&mut self) {
        self.completed = self.exercises.iter().all(|e| e.completed);
    }

    pub fn completed_count(&self) -> usize {
        self.exercises.iter().filter(|e| e.completed).count()
    }

    pub fn progress_percent(&self) -> f64 {
        if self.exercises.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.exercises.len() as f64 * 100.0
    }

    pub fn exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == exercise_id)
    }
}

impl WellnessState {
    /// Store a routine under a new id; its completion flag is recomputed on the way in
    pub fn add_workout_routine(&mut self, mut routine: WorkoutRoutine) -> String {
        routine.refresh_completed();
        let id = generate_id();
        routine.id = id.clone();
        self.workout_routines.push(routine);
        id
    }

    /// Set one exercise's completion and recompute its routine's flag.
    /// Returns false when the routine or exercise does not exist.
    pub fn update_exercise_status(
        &mut self,
        routine_id: &str,
        exercise_id: &str,
        completed: bool,
    ) -> bool {
        let Some(routine) = self
            .workout_routines
            .iter_mut()
            .find(|r| r.id == routine_id)
        else {
            return false;
        };
        let Some(exercise) = routine.exercises.iter_mut().find(|e| e.id == exercise_id) else {
            return false;
        };

        exercise.completed = completed;
        routine.refresh_completed();
        true
    }

    pub fn set_active_workout(&mut self, id: Option<String>) {
        self.active_workout_id = id;
    }

    /// The routine to display: the explicit selection if set, otherwise the
    /// first incomplete routine, otherwise the first routine.
    pub fn current_workout(&self) -> Option<&WorkoutRoutine> {
        match &self.active_workout_id {
            Some(id) => self.workout_routines.iter().find(|r| &r.id == id),
            None => self
                .workout_routines
                .iter()
                .find(|r| !r.completed)
                .or_else(|| self.workout_routines.first()),
        }
    }

    /// Locate the routine holding an exercise
    pub fn workout_for_exercise(&self, exercise_id: &str) -> Option<&WorkoutRoutine> {
        self.workout_routines
            .iter()
            .find(|r| r.exercise(exercise_id).is_some())
    }
}
