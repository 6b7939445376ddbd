//! Run configuration for the terminal binary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::SessionConfig;
use crate::types::DEFAULT_REVEAL_GOAL;

/// Settings read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub photos: Vec<PathBuf>,
    /// `None` turns the reveal into a cosmetic effect with no win
    pub reveal_goal: Option<u8>,
    pub log_path: Option<PathBuf>,
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key/value source; unparsable values fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("PHOTO_TETRIS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let photos = non_empty("PHOTO_TETRIS_PHOTOS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();

        let reveal_goal = match non_empty("PHOTO_TETRIS_REVEAL_GOAL").and_then(|s| s.parse().ok()) {
            Some(0) => None,
            Some(n) => Some(n),
            None => Some(DEFAULT_REVEAL_GOAL),
        };

        let log_path = non_empty("PHOTO_TETRIS_LOG_PATH").map(PathBuf::from);

        Self {
            seed,
            photos,
            reveal_goal,
            log_path,
        }
    }

    /// Session settings for `photo_count` successfully loaded photos
    pub fn session_config(&self, photo_count: usize) -> SessionConfig {
        SessionConfig {
            seed: self.seed,
            reveal_goal: self.reveal_goal,
            photo_count: photo_count.min(u16::MAX as usize) as u16,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
