//! Photo Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `photo_tetris::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path. Runtime
//! configuration lives in [`config`].

pub mod config;

pub use photo_tetris_core as core;
pub use photo_tetris_input as input;
pub use photo_tetris_term as term;
pub use photo_tetris_types as types;
