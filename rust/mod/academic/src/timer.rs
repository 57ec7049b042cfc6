//! Remaining-time tracking for timed quizzes.

/// `m:ss`, e.g. `29:05`. Minutes are not wrapped into hours.
pub fn format_remaining(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Whole-second countdown, advanced by one [`tick`](Countdown::tick) per
/// elapsed second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
}

impl Countdown {
    pub fn new(seconds: u64) -> Self {
        Self { remaining: seconds }
    }

    /// Countdown for a quiz `time_limit`, in minutes.
    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(u64::from(minutes) * 60)
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }

    /// Advance one second. Returns `true` exactly once, on the tick that
    /// reaches zero.
    pub fn tick(&mut self) -> bool {
        match self.remaining {
            0 => false,
            1 => {
                self.remaining = 0;
                true
            }
            n => {
                self.remaining = n - 1;
                false
            }
        }
    }

    pub fn display(&self) -> String {
        format_remaining(self.remaining)
    }
}
