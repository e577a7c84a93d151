//! Paced breathing: inhale, hold, exhale, rest, repeated for a fixed number
//! of cycles.

use super::{Countdown, SessionStatus};
use serde::{Deserialize, Serialize};

/// Phase lengths in seconds and the number of breath cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathingConfig {
    pub inhale: u32,
    pub hold: u32,
    pub exhale: u32,
    pub rest: u32,
    pub cycles: u32,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        BreathingConfig {
            inhale: 4,
            hold: 7,
            exhale: 8,
            rest: 1,
            cycles: 3,
        }
    }
}

impl BreathingConfig {
    pub fn duration(&self, phase: BreathingPhase) -> u32 {
        match phase {
            BreathingPhase::Inhale => self.inhale,
            BreathingPhase::Hold => self.hold,
            BreathingPhase::Exhale => self.exhale,
            BreathingPhase::Rest => self.rest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingPhase {
    Inhale,
    Hold,
    Exhale,
    Rest,
}

impl BreathingPhase {
    pub fn instructions(&self) -> &'static str {
        match self {
            BreathingPhase::Inhale => "Inhale slowly",
            BreathingPhase::Hold => "Hold your breath",
            BreathingPhase::Exhale => "Exhale slowly",
            BreathingPhase::Rest => "Get ready...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingEvent {
    Phase(BreathingPhase),
    Finished,
}

#[derive(Debug, Clone)]
pub struct BreathingSession {
    config: BreathingConfig,
    phase: BreathingPhase,
    seconds_left: u32,
    cycles: u32,
    status: SessionStatus,
    finished: bool,
}

impl BreathingSession {
    pub fn new(config: BreathingConfig) -> Self {
        BreathingSession {
            config,
            phase: BreathingPhase::Rest,
            seconds_left: 0,
            cycles: 0,
            status: SessionStatus::Idle,
            finished: false,
        }
    }

    pub fn phase(&self) -> BreathingPhase {
        self.phase
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    /// Cycles completed so far
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn total_cycles(&self) -> u32 {
        self.config.cycles
    }

    /// True once the last cycle ended and the session went back to idle
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Start a new session from idle, or resume a paused one
    pub fn start(&mut self) {
        match self.status {
            SessionStatus::Idle => {
                self.phase = BreathingPhase::Inhale;
                self.seconds_left = self.config.inhale;
                self.cycles = 0;
                self.finished = false;
                self.status = SessionStatus::Running;
            }
            SessionStatus::Paused => self.status = SessionStatus::Running,
            SessionStatus::Running => {}
        }
    }

    pub fn pause(&mut self) {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::Paused;
        }
    }

    /// Start/resume when not running, pause when running
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Restore the current phase's full duration and pause, without
    /// moving to another phase
    pub fn reset(&mut self) {
        if self.status == SessionStatus::Idle {
            return;
        }
        self.seconds_left = self.config.duration(self.phase);
        self.status = SessionStatus::Paused;
    }

    /// Abandon the session and return to idle
    pub fn stop(&mut self) {
        self.phase = BreathingPhase::Rest;
        self.seconds_left = 0;
        self.cycles = 0;
        self.status = SessionStatus::Idle;
    }

    fn enter(&mut self, phase: BreathingPhase) -> Option<BreathingEvent> {
        self.phase = phase;
        self.seconds_left = self.config.duration(phase);
        Some(BreathingEvent::Phase(phase))
    }
}

impl Countdown for BreathingSession {
    type Event = BreathingEvent;

    fn tick(&mut self) -> Option<BreathingEvent> {
        if self.status != SessionStatus::Running {
            return None;
        }

        if self.seconds_left > 1 {
            self.seconds_left -= 1;
            return None;
        }

        match self.phase {
            BreathingPhase::Inhale => self.enter(BreathingPhase::Hold),
            BreathingPhase::Hold => self.enter(BreathingPhase::Exhale),
            BreathingPhase::Exhale => {
                let completed = self.cycles + 1;
                if completed >= self.config.cycles {
                    self.stop();
                    self.cycles = completed;
                    self.finished = true;
                    Some(BreathingEvent::Finished)
                } else {
                    self.cycles = completed;
                    self.enter(BreathingPhase::Rest)
                }
            }
            BreathingPhase::Rest => self.enter(BreathingPhase::Inhale),
        }
    }

    fn status(&self) -> SessionStatus {
        self.status
    }
}
