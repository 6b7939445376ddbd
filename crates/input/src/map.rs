//! Key mapping from terminal events to game actions.
//!
//! Letters are matched case-insensitively. Chords with Ctrl or Alt never map
//! to a game action, so Ctrl-C stays free for quitting.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to the game action it triggers, if any.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match normalize(key.code) {
        KeyCode::Left | KeyCode::Char('h' | 'a') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'd') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 's') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('k' | 'w') => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Enter | KeyCode::Char('r') => Some(GameAction::Start),
        _ => None,
    }
}

/// Whether the key ends the program: `q`, Esc or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match normalize(key.code) {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
