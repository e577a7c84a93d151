//! Guided sessions: one-second countdown state machines.
//!
//! Sessions hold no timers of their own. Whoever runs a session calls
//! [`Countdown::tick`] once per elapsed second while it is running; a paused
//! or stopped session ignores ticks, so nothing keeps counting after stop.

pub mod breathing;
pub mod exercise_timer;
pub mod stretch_sequence;

pub use breathing::{BreathingConfig, BreathingEvent, BreathingPhase, BreathingSession};
pub use exercise_timer::{ExerciseEvent, ExerciseTimer};
pub use stretch_sequence::{StretchEvent, StretchSequence};

/// Run state shared by every session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

/// A countdown advanced by one second per tick
pub trait Countdown {
    type Event;

    /// Advance one second. Returns an event when the tick crossed a
    /// phase or exercise boundary.
    fn tick(&mut self) -> Option<Self::Event>;

    fn status(&self) -> SessionStatus;

    fn is_running(&self) -> bool {
        self.status() == SessionStatus::Running
    }
}

/// Format seconds as m:ss
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
