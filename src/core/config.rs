//! Game configuration.
//!
//! The only thing a game is configured with is its time control: the
//! starting time on each clock and the per-move increment.

use serde::{Deserialize, Serialize};

/// Total time per side and increment per completed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeControl {
    /// Starting time on each clock, in minutes. Must be positive.
    pub total_minutes: u32,

    /// Seconds added to the mover's clock after each completed move.
    pub increment_seconds: u32,
}

impl TimeControl {
    /// Create a time control.
    #[must_use]
    pub const fn new(total_minutes: u32, increment_seconds: u32) -> Self {
        Self {
            total_minutes,
            increment_seconds,
        }
    }

    /// Starting time on each clock, in seconds.
    #[must_use]
    pub const fn initial_seconds(&self) -> u32 {
        self.total_minutes.saturating_mul(60)
    }

    /// A time control is usable when the clocks start above zero.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.total_minutes > 0
    }
}

impl Default for TimeControl {
    /// Five minutes with a one second increment.
    fn default() -> Self {
        Self::new(5, 1)
    }
}

impl std::fmt::Display for TimeControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.total_minutes, self.increment_seconds)
    }
}
