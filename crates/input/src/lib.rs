//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The engine
//! never sees key codes; the host translates and dispatches.

pub mod map;

pub use photo_tetris_types as types;

pub use map::{handle_key_event, should_quit};
