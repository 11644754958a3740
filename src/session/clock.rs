//! Two-sided countdown clock with increment.
//!
//! The clock does not measure time. An external timer calls `tick` once per
//! elapsed second for the side whose clock is running; at most one side runs
//! at a time.

use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorMap, TimeControl};

/// Remaining seconds per side, the increment, and which side is running.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    remaining: ColorMap<u32>,
    increment: u32,
    active: Option<Color>,
}

impl Clock {
    /// A stopped clock with both sides at the time control's starting time.
    #[must_use]
    pub fn new(time_control: TimeControl) -> Self {
        Self {
            remaining: ColorMap::with_value(time_control.initial_seconds()),
            increment: time_control.increment_seconds,
            active: None,
        }
    }

    /// Seconds left for a side.
    #[must_use]
    pub fn remaining(&self, color: Color) -> u32 {
        self.remaining[color]
    }

    /// Seconds left for both sides together.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.remaining.iter().map(|(_, &secs)| u64::from(secs)).sum()
    }

    #[must_use]
    pub fn increment(&self) -> u32 {
        self.increment
    }

    /// The side whose clock is running, if any.
    #[must_use]
    pub fn active(&self) -> Option<Color> {
        self.active
    }

    /// Run `color`'s clock. Any other running clock stops.
    pub fn start(&mut self, color: Color) {
        self.active = Some(color);
    }

    /// Stop whichever clock is running and return it.
    pub fn stop(&mut self) -> Option<Color> {
        self.active.take()
    }

    /// Credit `color` with one increment.
    pub fn add_increment(&mut self, color: Color) {
        self.remaining[color] = self.remaining[color].saturating_add(self.increment);
    }

    /// One second elapses on `color`'s clock.
    ///
    /// Returns the new remaining time, floored at zero, or `None` without
    /// touching anything when `color` is not the running side.
    pub fn tick(&mut self, color: Color) -> Option<u32> {
        if self.active != Some(color) {
            return None;
        }
        let remaining = &mut self.remaining[color];
        *remaining = remaining.saturating_sub(1);
        Some(*remaining)
    }
}
