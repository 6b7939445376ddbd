//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so the engine,
//! the renderer and the input layer can share them freely.
//!
//! # Grid Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//!
//! # Levels
//!
//! Five levels, one every [`LINES_TO_ADVANCE`] cleared lines. The drop interval
//! is looked up in [`LEVEL_SPEEDS`]:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 3200ms |
//! | 2 | 2400ms |
//! | 3 | 1680ms |
//! | 4 | 1200ms |
//! | 5 | 720ms |
//!
//! # Examples
//!
//! ```
//! use photo_tetris_types::{Cell, PieceKind, Rotation, COLS, ROWS};
//!
//! assert_eq!(Rotation::West.next(), Rotation::North);
//! assert!(Cell::Empty.is_empty());
//! assert!(!Cell::Block(PieceKind::T).is_empty());
//! assert_eq!((COLS, ROWS), (10, 20));
//! ```

/// Grid width in cells
pub const COLS: usize = 10;

/// Grid height in cells
pub const ROWS: usize = 20;

/// Host frame length in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Drop interval per level (milliseconds per row), index 0 = level 1
pub const LEVEL_SPEEDS: [u32; 5] = [3200, 2400, 1680, 1200, 720];

/// Cleared lines needed for each level step
pub const LINES_TO_ADVANCE: u32 = 5;

/// Highest reachable level
pub const MAX_LEVEL: u8 = 5;

/// Line clear reward, indexed by lines cleared in a single lock
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Background rows to reveal before the session is won
pub const DEFAULT_REVEAL_GOAL: u8 = 8;

/// Fade-in time of a newly revealed background row
pub const REVEAL_FADE_MS: u32 = 400;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::T => "T",
        }
    }
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index, 0-3
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for an index, taken mod 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Next rotation state (index + 1 mod 4)
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Contents of a single grid cell.
///
/// Only [`Cell::Empty`] is empty. The payload of the other variants is for
/// rendering; collision and full-row tests treat them all as occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Plain locked block, coloured by the kind that produced it
    Block(PieceKind),
    /// Locked block textured with the photo at this index
    Photo(u16),
    /// Solid background marker
    Revealed,
}

impl Cell {
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column offset (-1 or +1)
    pub fn dx(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Game actions dispatched by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Start,
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Before the first start, or after an explicit stop
    #[default]
    Idle,
    /// Ticking and accepting input
    Running,
    /// A freshly spawned piece collided; terminal until restart
    GameOver,
    /// The background reveal goal was reached; terminal until restart
    Won,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }
}
