//! Background reveal - photo rows uncovered from the bottom as lines clear
//!
//! This is an observer of lock outcomes. It never touches the grid: it only
//! counts revealed rows and animates their fade-in for the renderer. The
//! session decides whether reaching the goal ends the game.

use arrayvec::ArrayVec;

use crate::types::{REVEAL_FADE_MS, ROWS};

/// A row whose fade-in is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FadingRow {
    /// Row counted from the bottom (0 = bottom row)
    row: u8,
    elapsed_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundReveal {
    /// Rows fully revealed, counted from the bottom
    revealed: u8,
    /// Rows requested so far (revealed + fading)
    requested: u8,
    fading: ArrayVec<FadingRow, ROWS>,
    goal: Option<u8>,
}

impl BackgroundReveal {
    /// A goal of zero rows means no goal.
    pub fn new(goal: Option<u8>) -> Self {
        Self {
            revealed: 0,
            requested: 0,
            fading: ArrayVec::new(),
            goal: goal.filter(|g| *g > 0).map(|g| g.min(ROWS as u8)),
        }
    }

    pub fn reset(&mut self) {
        self.revealed = 0;
        self.requested = 0;
        self.fading.clear();
    }

    /// Reveal one more row per cleared line.
    ///
    /// Returns true when this call makes the goal reached.
    pub fn observe_clear(&mut self, lines: usize) -> bool {
        let was_reached = self.goal_reached();
        for _ in 0..lines {
            if self.requested as usize >= ROWS {
                break;
            }
            self.fading.push(FadingRow {
                row: self.requested,
                elapsed_ms: 0,
            });
            self.requested += 1;
        }
        !was_reached && self.goal_reached()
    }

    /// Advance fade animations; rows that finish become fully revealed
    pub fn advance(&mut self, elapsed_ms: u32) {
        for f in self.fading.iter_mut() {
            f.elapsed_ms = f.elapsed_ms.saturating_add(elapsed_ms);
        }
        let mut revealed = self.revealed;
        self.fading.retain(|f| {
            if f.elapsed_ms >= REVEAL_FADE_MS {
                revealed = revealed.max(f.row + 1);
                false
            } else {
                true
            }
        });
        self.revealed = revealed;
    }

    /// Rows fully revealed, counted from the bottom
    pub fn revealed_rows(&self) -> u8 {
        self.revealed
    }

    /// Rows revealed or fading in
    pub fn requested_rows(&self) -> u8 {
        self.requested
    }

    pub fn goal(&self) -> Option<u8> {
        self.goal
    }

    /// The goal counts requested rows so the win does not wait for the fade
    pub fn goal_reached(&self) -> bool {
        self.goal.is_some_and(|g| self.requested >= g)
    }

    /// Opacity of a grid row (0 = top) in 0.0..=1.0
    pub fn alpha(&self, grid_row: usize) -> f32 {
        if grid_row >= ROWS {
            return 0.0;
        }
        let from_bottom = (ROWS - 1 - grid_row) as u8;
        if from_bottom < self.revealed {
            return 1.0;
        }
        self.fading
            .iter()
            .find(|f| f.row == from_bottom)
            .map(|f| f.elapsed_ms as f32 / REVEAL_FADE_MS as f32)
            .unwrap_or(0.0)
    }
}

impl Default for BackgroundReveal {
    fn default() -> Self {
        Self::new(None)
    }
}
