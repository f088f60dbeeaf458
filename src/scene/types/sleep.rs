//! Running count of dormant letters

use bevy::prelude::*;

/// Number of tracked letters the physics engine currently reports as asleep.
///
/// Only ever changed through [`SleepCounter::record`], which keeps the count
/// inside `[0, total]`.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SleepCounter {
    count: usize,
}

impl SleepCounter {
    pub fn count(&self) -> usize {
        self.count
    }

    /// Apply one dormant/active notification given `total` tracked letters
    pub fn record(&mut self, dormant: bool, total: usize) {
        self.count = if dormant {
            (self.count + 1).min(total)
        } else {
            self.count.saturating_sub(1)
        };
    }

    /// Clamp after the tracked set shrank below the recorded count
    pub fn clamp_to(&mut self, total: usize) {
        self.count = self.count.min(total);
    }

    /// True when every tracked letter is dormant
    pub fn all_dormant(&self, total: usize) -> bool {
        self.count >= total
    }
}
