//! Runs a stretch routine's exercises back to back

use super::{Countdown, SessionStatus};
use crate::domain::wellness::StretchExercise;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StretchEvent {
    /// Moved on to the exercise at `index`
    Next { index: usize, name: String },
    /// The last exercise ended; the sequence is idle again
    Complete,
}

#[derive(Debug, Clone)]
pub struct StretchSequence {
    exercises: Vec<StretchExercise>,
    active_index: Option<usize>,
    time_left: u32,
    status: SessionStatus,
}

impl StretchSequence {
    /// Exercises are run in their `order`
    pub fn new(mut exercises: Vec<StretchExercise>) -> Self {
        exercises.sort_by_key(|e| e.order);
        StretchSequence {
            exercises,
            active_index: None,
            time_left: 0,
            status: SessionStatus::Idle,
        }
    }

    pub fn exercises(&self) -> &[StretchExercise] {
        &self.exercises
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_exercise(&self) -> Option<&StretchExercise> {
        self.active_index.and_then(|i| self.exercises.get(i))
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Begin at the first exercise. Returns false for an empty routine.
    pub fn start(&mut self) -> bool {
        let Some(first) = self.exercises.first() else {
            return false;
        };
        self.active_index = Some(0);
        self.time_left = first.duration;
        self.status = SessionStatus::Running;
        true
    }

    pub fn pause(&mut self) {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == SessionStatus::Paused {
            self.status = SessionStatus::Running;
        }
    }

    pub fn toggle(&mut self) {
        match self.status {
            SessionStatus::Running => self.pause(),
            SessionStatus::Paused => self.resume(),
            SessionStatus::Idle => {}
        }
    }

    /// Restore the current exercise's full duration and pause
    pub fn reset(&mut self) {
        if let Some(exercise) = self.active_exercise() {
            self.time_left = exercise.duration;
            self.status = SessionStatus::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.active_index = None;
        self.time_left = 0;
        self.status = SessionStatus::Idle;
    }
}

impl Countdown for StretchSequence {
    type Event = StretchEvent;

    fn tick(&mut self) -> Option<StretchEvent> {
        if self.status != SessionStatus::Running {
            return None;
        }
        let index = self.active_index?;

        if self.time_left > 1 {
            self.time_left -= 1;
            return None;
        }

        match self.exercises.get(index + 1) {
            Some(next) => {
                self.active_index = Some(index + 1);
                self.time_left = next.duration;
                Some(StretchEvent::Next {
                    index: index + 1,
                    name: next.name.clone(),
                })
            }
            None => {
                self.stop();
                Some(StretchEvent::Complete)
            }
        }
    }

    fn status(&self) -> SessionStatus {
        self.status
    }
}
