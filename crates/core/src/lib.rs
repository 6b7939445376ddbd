//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole engine: the tetromino catalog, the grid, the
//! piece controller and the session state machine. It has **no dependencies**
//! on rendering, input devices or I/O, which makes it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Any host that can call `tick` once per frame can drive it
//!
//! # Module Structure
//!
//! - [`pieces`]: The 7 tetrominoes and their 4 fixed rotation layouts
//! - [`grid`]: 10x20 playfield with collision, merge and line sweep
//! - [`controller`]: Spawning, moving, rotating and dropping the active piece
//! - [`session`]: Score, level, drop speed and the game lifecycle
//! - [`scoring`]: Reward table and level progression
//! - [`reveal`]: Background rows uncovered as lines clear
//! - [`rng`]: Seeded uniform piece selection
//! - [`snapshot`]: Read-only per-frame state for renderers
//!
//! # Game Rules
//!
//! - **Rotation**: Table lookup plus a 3-step kick ladder (in place, +1, -1)
//! - **Gravity**: One row per drop interval, at most one row per tick
//! - **Locking**: Immediate on landing; no lock delay, no hold
//! - **Scoring**: 40 / 100 / 300 / 1200 for 1-4 lines, no drop points
//! - **Levels**: 1-5, one level every 5 lines
//! - **Game over**: Only when a newly spawned piece collides
//!
//! # Example
//!
//! ```
//! use photo_tetris_core::GameSession;
//! use photo_tetris_types::{GameAction, Phase};
//!
//! let mut game = GameSession::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! let outcome = game.apply_action(GameAction::HardDrop);
//!
//! assert!(outcome.is_some());
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.score(), 0); // Drops alone never score
//! ```
//!
//! # Timing
//!
//! The host calls [`GameSession::tick`](session::GameSession::tick) once per
//! rendered frame with the elapsed milliseconds. Elapsed time accumulates until
//! it reaches the level's drop interval, then a single gravity step runs and
//! the accumulator resets.

pub mod controller;
pub mod grid;
pub mod pieces;
pub mod reveal;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use photo_tetris_types as types;

// Re-export commonly used types for convenience
pub use controller::{ActivePiece, DropOutcome};
pub use grid::Grid;
pub use pieces::{shape_for, Shape};
pub use reveal::BackgroundReveal;
pub use rng::{PieceSource, SimpleRng};
pub use session::{GameSession, LockOutcome, SessionConfig};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
