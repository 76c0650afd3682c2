//! Scoring module - line-clear points and level progression
//!
//! - A clear of `n` lines awards `n * 100 * level`, using the level in effect
//!   before the clear.
//! - Level is always `score / 1000 + 1`; it is derived, never set directly.
//! - Tick period shrinks by 50ms per level from 800ms, floored at 100ms.

use crate::types::{
    INITIAL_SPEED_MS, MIN_SPEED_MS, POINTS_PER_LINE, SCORE_PER_LEVEL, SPEED_INCREMENT_MS,
};

/// Points for clearing `lines` rows at `level`.
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(POINTS_PER_LINE)
        .saturating_mul(level)
}

/// Level implied by a score.
pub fn calculate_level(score: u32) -> u32 {
    score / SCORE_PER_LEVEL + 1
}

/// Tick period for a level (in milliseconds).
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(SPEED_INCREMENT_MS);
    INITIAL_SPEED_MS.saturating_sub(reduction).max(MIN_SPEED_MS)
}

/// Score, level and line total for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scoreboard {
    score: u32,
    level: u32,
    lines: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Record a clear and return the points awarded.
    ///
    /// Zero lines leaves everything untouched.
    pub fn record_clear(&mut self, lines: u32) -> u32 {
        if lines == 0 {
            return 0;
        }
        let points = calculate_line_score(lines, self.level);
        self.score = self.score.saturating_add(points);
        self.level = calculate_level(self.score);
        self.lines = self.lines.saturating_add(lines);
        points
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}
