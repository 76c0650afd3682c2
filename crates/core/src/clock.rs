//! Drop clock - tick period bookkeeping for the game loop
//!
//! The loop owns the actual timer. This type only decides *when* that timer
//! has to be torn down and re-armed: exactly when the level changes.

use std::time::Duration;

use crate::scoring::get_drop_interval_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropClock {
    level: u32,
    period_ms: u32,
}

impl DropClock {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            period_ms: get_drop_interval_ms(level),
        }
    }

    /// Level the current period was computed for.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms as u64)
    }

    /// Returns the new period if `level` differs from the armed one.
    ///
    /// A level change always re-arms, even when both levels map to the same
    /// (floored) period.
    pub fn rearm(&mut self, level: u32) -> Option<Duration> {
        if level == self.level {
            return None;
        }
        *self = Self::new(level);
        Some(self.period())
    }
}
