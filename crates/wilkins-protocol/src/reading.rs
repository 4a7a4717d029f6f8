//! Rate-of-reading test: a 60-second countdown with a manual word tally.
//!
//! The timer is a plain state machine. Every transition takes the timer by
//! value and returns the next one; the host owns the actual one-second
//! schedule and calls [`ReadingTimer::tick`].

use serde::Serialize;

use wilkins_core::models::reading::ReadingPhase;

/// Length of one reading, in seconds.
pub const READING_SECONDS: u32 = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    /// Countdown reached zero (or was halted) and awaits [`ReadingTimer::finish`].
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadingTimer {
    status: TimerStatus,
    phase: Option<ReadingPhase>,
    remaining: u32,
    words: u32,
    overlay: bool,
}

impl Default for ReadingTimer {
    fn default() -> Self {
        Self {
            status: TimerStatus::Idle,
            phase: None,
            remaining: READING_SECONDS,
            words: 0,
            overlay: false,
        }
    }
}

/// A finished reading and its computed speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletedReading {
    pub phase: ReadingPhase,
    pub words: u32,
    pub elapsed_seconds: u32,
    pub wpm: u32,
}

/// `round(words / elapsed * 60)` with elapsed floored at one second.
pub fn words_per_minute(words: u32, remaining: u32) -> u32 {
    let elapsed = READING_SECONDS.saturating_sub(remaining).max(1);
    (f64::from(words) / f64::from(elapsed) * 60.0).round() as u32
}

impl ReadingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn phase(&self) -> Option<ReadingPhase> {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn words(&self) -> u32 {
        self.words
    }

    /// Whether the filter tint covers the screen (tinted readings only).
    pub fn overlay_active(&self) -> bool {
        self.overlay
    }

    pub fn elapsed_seconds(&self) -> u32 {
        READING_SECONDS.saturating_sub(self.remaining)
    }

    /// Elapsed fraction of the countdown, for the progress ring.
    pub fn progress(&self) -> f64 {
        f64::from(self.elapsed_seconds()) / f64::from(READING_SECONDS)
    }

    /// Begin a reading. Ignored while another reading is running.
    pub fn start(self, phase: ReadingPhase) -> Self {
        if self.is_running() {
            return self;
        }
        Self {
            status: TimerStatus::Running,
            phase: Some(phase),
            remaining: READING_SECONDS,
            words: 0,
            overlay: phase == ReadingPhase::Tinted,
        }
    }

    /// Advance one second. Reaching zero moves the timer to `Stopped`.
    pub fn tick(self) -> Self {
        if !self.is_running() {
            return self;
        }
        let remaining = self.remaining.saturating_sub(1);
        Self {
            remaining,
            status: if remaining == 0 {
                TimerStatus::Stopped
            } else {
                TimerStatus::Running
            },
            ..self
        }
    }

    /// Halt the countdown without recording anything yet.
    pub fn stop(self) -> Self {
        if !self.is_running() {
            return self;
        }
        Self {
            status: TimerStatus::Stopped,
            ..self
        }
    }

    pub fn increment(self) -> Self {
        if !self.is_running() {
            return self;
        }
        Self {
            words: self.words.saturating_add(1),
            ..self
        }
    }

    pub fn decrement(self) -> Self {
        if !self.is_running() {
            return self;
        }
        Self {
            words: self.words.saturating_sub(1),
            ..self
        }
    }

    /// Compute the reading speed and return to `Idle`. Valid from `Running`
    /// (manual stop) or `Stopped` (expiry); yields nothing when idle.
    pub fn finish(self) -> (Self, Option<CompletedReading>) {
        let Some(phase) = self.phase else {
            return (self, None);
        };
        if self.status == TimerStatus::Idle {
            return (self, None);
        }

        let completed = CompletedReading {
            phase,
            words: self.words,
            elapsed_seconds: self.elapsed_seconds().max(1),
            wpm: words_per_minute(self.words, self.remaining),
        };
        let idle = Self {
            status: TimerStatus::Idle,
            phase: None,
            overlay: false,
            ..self
        };
        (idle, Some(completed))
    }
}
