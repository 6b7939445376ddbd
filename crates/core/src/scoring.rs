//! Scoring module - line clear rewards and level progression
//!
//! The reward table only covers 0-4 lines per lock. Larger clears are capped
//! at the 4-line reward instead of scoring nothing.

use crate::types::{LEVEL_SPEEDS, LINES_TO_ADVANCE, LINE_SCORES, MAX_LEVEL};

/// Reward for clearing `lines` rows with a single lock
pub fn line_clear_reward(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// Level reached after `total_lines` cleared lines (1-based, capped at MAX_LEVEL)
pub fn level_for_lines(total_lines: u32) -> u8 {
    let level = total_lines / LINES_TO_ADVANCE + 1;
    level.min(MAX_LEVEL as u32) as u8
}

/// Drop interval for a level
///
/// Levels outside 1..=MAX_LEVEL are clamped into range.
pub fn drop_interval_ms(level: u8) -> u32 {
    let idx = level.clamp(1, MAX_LEVEL) as usize - 1;
    LEVEL_SPEEDS[idx]
}
