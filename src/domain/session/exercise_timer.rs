//! Countdown for a single workout exercise

use super::{Countdown, SessionStatus};
use crate::domain::wellness::Exercise;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseEvent {
    Complete { exercise_id: String },
}

#[derive(Debug, Clone, Default)]
pub struct ExerciseTimer {
    exercise_id: Option<String>,
    duration: u32,
    time_left: u32,
    status: SessionStatus,
}

impl ExerciseTimer {
    pub fn new() -> Self {
        ExerciseTimer::default()
    }

    /// Start counting down `exercise`, replacing any running countdown
    pub fn start(&mut self, exercise: &Exercise) {
        self.exercise_id = Some(exercise.id.clone());
        self.duration = exercise.duration;
        self.time_left = exercise.duration;
        self.status = SessionStatus::Running;
    }

    pub fn exercise_id(&self) -> Option<&str> {
        self.exercise_id.as_deref()
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn toggle(&mut self) {
        self.status = match self.status {
            SessionStatus::Running => SessionStatus::Paused,
            SessionStatus::Paused => SessionStatus::Running,
            SessionStatus::Idle => SessionStatus::Idle,
        };
    }

    pub fn reset(&mut self) {
        if self.exercise_id.is_some() {
            self.time_left = self.duration;
            self.status = SessionStatus::Paused;
        }
    }
}

impl Countdown for ExerciseTimer {
    type Event = ExerciseEvent;

    fn tick(&mut self) -> Option<ExerciseEvent> {
        if self.status != SessionStatus::Running {
            return None;
        }

        if self.time_left > 1 {
            self.time_left -= 1;
            return None;
        }

        self.time_left = 0;
        self.status = SessionStatus::Idle;
        self.exercise_id
            .clone()
            .map(|exercise_id| ExerciseEvent::Complete { exercise_id })
    }

    fn status(&self) -> SessionStatus {
        self.status
    }
}
