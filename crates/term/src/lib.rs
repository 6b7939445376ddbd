//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! `GameSnapshot` into a framebuffer and flushes the changes to a crossterm
//! backend. Photos are decoded once and sampled per grid cell.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod photo;
pub mod renderer;

pub use photo_tetris_core as core;
pub use photo_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{kind_color, GameView, Viewport};
pub use photo::{Photo, PhotoSet, FALLBACK_TILE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
