//! Session tests - lifecycle, timing and locking through the public API

use photo_tetris::core::{ActivePiece, GameSession, SessionConfig};
use photo_tetris::types::{Cell, GameAction, Phase, FRAME_MS, LEVEL_SPEEDS};

fn running(seed: u32) -> GameSession {
    let mut game = GameSession::new(seed);
    game.apply_action(GameAction::Start);
    game
}

fn filled(game: &GameSession) -> usize {
    game.grid().cells().iter().filter(|c| !c.is_empty()).count()
}

#[test]
fn test_new_session_is_idle() {
    let game = GameSession::new(12345);
    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.current().is_none());
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.drop_interval_ms(), LEVEL_SPEEDS[0]);
}

#[test]
fn test_idle_session_ignores_input_and_time() {
    let mut game = GameSession::new(12345);
    let before = game.snapshot();
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ] {
        assert!(game.apply_action(action).is_none());
    }
    assert!(game.tick(10_000).is_none());
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_start_spawns_current_and_next() {
    let game = running(7);
    assert_eq!(game.phase(), Phase::Running);
    let current = game.current().unwrap();
    assert_eq!(current, ActivePiece::spawn(current.kind));
    assert!(game.next().is_some());
}

#[test]
fn test_gravity_waits_for_full_interval() {
    let mut game = running(3);
    let y0 = game.current().unwrap().y;

    let mut elapsed = 0;
    while elapsed + FRAME_MS < LEVEL_SPEEDS[0] {
        game.tick(FRAME_MS);
        elapsed += FRAME_MS;
    }
    assert_eq!(game.current().unwrap().y, y0);

    game.tick(FRAME_MS);
    assert_eq!(game.current().unwrap().y, y0 + 1);
    assert_eq!(game.drop_counter_ms(), 0);
}

#[test]
fn test_long_frame_drops_only_one_row() {
    let mut game = running(3);
    let y0 = game.current().unwrap().y;
    game.tick(LEVEL_SPEEDS[0] * 5);
    assert_eq!(game.current().unwrap().y, y0 + 1);
}

#[test]
fn test_hard_drop_locks_and_promotes_next() {
    let mut game = running(99);
    let expected_next = game.next().unwrap();

    let outcome = game.apply_action(GameAction::HardDrop).unwrap();
    assert_eq!(outcome.lines_cleared, 0);
    assert_eq!(outcome.score_delta, 0);
    assert!(!outcome.triggered_game_over);
    assert_eq!(game.score(), 0);
    assert_eq!(filled(&game), 4);

    let current = game.current().unwrap();
    assert_eq!(current, ActivePiece::spawn(expected_next));
    assert_eq!(game.take_last_event(), Some(outcome));
    assert_eq!(game.take_last_event(), None);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ];
    let mut a = running(2024);
    let mut b = running(2024);
    for action in script {
        a.apply_action(action);
        b.apply_action(action);
        a.tick(FRAME_MS);
        b.tick(FRAME_MS);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_stacking_in_the_middle_ends_in_game_over() {
    let mut game = running(5);
    let mut drops = 0;
    while game.phase() == Phase::Running {
        let outcome = game.apply_action(GameAction::HardDrop).unwrap();
        drops += 1;
        assert_eq!(outcome.lines_cleared, 0);
        assert!(drops < 100, "game never ended");
        if outcome.triggered_game_over {
            break;
        }
    }
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.score(), 0);

    // Frozen: nothing moves, nothing locks.
    let frozen = game.snapshot();
    assert!(game.apply_action(GameAction::HardDrop).is_none());
    assert!(game.apply_action(GameAction::MoveLeft).is_none());
    assert!(game.tick(LEVEL_SPEEDS[0]).is_none());
    assert_eq!(game.snapshot(), frozen);
}

#[test]
fn test_restart_after_game_over_resets_everything() {
    let mut game = running(5);
    while game.phase() == Phase::Running {
        game.apply_action(GameAction::HardDrop);
    }
    game.apply_action(GameAction::Start);
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(filled(&game), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.lines(), 0);
    assert_eq!(game.reveal().revealed_rows(), 0);
}

#[test]
fn test_stop_returns_to_idle() {
    let mut game = running(11);
    game.apply_action(GameAction::HardDrop);
    game.stop();
    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.tick(LEVEL_SPEEDS[0]).is_none());
    assert_eq!(filled(&game), 4);
}

#[test]
fn test_locked_cells_cycle_through_photos() {
    let mut game = GameSession::with_config(SessionConfig {
        seed: 8,
        photo_count: 2,
        ..SessionConfig::default()
    });
    game.start();

    for (i, expected) in [0u16, 1, 0].into_iter().enumerate() {
        game.apply_action(GameAction::HardDrop);
        let tagged = game
            .grid()
            .cells()
            .iter()
            .filter(|c| **c == Cell::Photo(expected))
            .count();
        assert_eq!(tagged, if i == 2 { 8 } else { 4 });
    }
    assert!(game
        .grid()
        .cells()
        .iter()
        .all(|c| matches!(c, Cell::Empty | Cell::Photo(_))));
}

#[test]
fn test_snapshot_matches_session() {
    let game = running(17);
    let snap = game.snapshot();
    assert!(snap.playable());
    assert_eq!(snap.phase, Phase::Running);
    assert_eq!(snap.next, game.next());
    let active = snap.active.unwrap();
    assert_eq!(active.kind, game.current().unwrap().kind);
    assert_eq!(active.cells(), game.current().unwrap().cells());
    assert_eq!(snap.revealed_rows, 0);
    assert!(snap.reveal_alpha.iter().all(|a| *a == 0.0));
}

#[test]
fn test_lock_resets_drop_counter() {
    let mut game = running(21);
    game.tick(3000);
    assert_eq!(game.drop_counter_ms(), 3000);

    game.apply_action(GameAction::HardDrop).unwrap();
    assert_eq!(game.drop_counter_ms(), 0);

    // The new piece gets a full interval before its first gravity step.
    let y0 = game.current().unwrap().y;
    game.tick(300);
    assert_eq!(game.current().unwrap().y, y0);
    assert_eq!(game.drop_counter_ms(), 300);
}

#[test]
fn test_snapshot_carries_reveal_goal() {
    assert_eq!(running(1).snapshot().reveal_goal, Some(8));

    let mut cosmetic = GameSession::with_config(SessionConfig {
        reveal_goal: None,
        ..SessionConfig::default()
    });
    cosmetic.start();
    assert_eq!(cosmetic.snapshot().reveal_goal, None);

    let zero = GameSession::with_config(SessionConfig {
        reveal_goal: Some(0),
        ..SessionConfig::default()
    });
    assert_eq!(zero.snapshot().reveal_goal, None);
}
