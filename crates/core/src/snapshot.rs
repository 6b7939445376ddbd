use crate::controller::ActivePiece;
use crate::types::{Cell, Phase, PieceKind, Rotation, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute grid coordinates of the filled cells
    pub fn cells(&self) -> arrayvec::ArrayVec<(i8, i8), 4> {
        ActivePiece {
            kind: self.kind,
            rotation: self.rotation,
            x: self.x,
            y: self.y,
        }
        .cells()
    }
}

/// Read-only per-frame view of a session for renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub grid: [[Cell; COLS]; ROWS],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub phase: Phase,
    pub score: u32,
    pub level: u8,
    pub lines: u32,
    pub drop_interval_ms: u32,
    /// Background rows fully revealed, counted from the bottom
    pub revealed_rows: u8,
    /// Rows that win the game; `None` when the reveal is cosmetic
    pub reveal_goal: Option<u8>,
    /// Background opacity per grid row (0 = top)
    pub reveal_alpha: [f32; ROWS],
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase.is_running()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[Cell::Empty; COLS]; ROWS],
            active: None,
            next: None,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: 0,
            revealed_rows: 0,
            reveal_goal: None,
            reveal_alpha: [0.0; ROWS],
        }
    }
}
