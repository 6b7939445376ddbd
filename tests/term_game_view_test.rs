use photo_tetris::core::{GameSession, GameSnapshot};
use photo_tetris::term::{GameView, Photo, PhotoSet, Rgb, Viewport, FALLBACK_TILE};
use photo_tetris::types::{Cell, Phase, PieceKind};

fn screen_text(fb: &photo_tetris::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn flat_photo(r: u8, g: u8, b: u8) -> Photo {
    Photo::from_pixels(1, 1, 3, 3, &[r, g, b]).unwrap()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSession::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, &PhotoSet::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.phase = Phase::Running;
    snap.grid[19][0] = Cell::Block(PieceKind::I);

    let fb = GameView::default().render(&snap, &PhotoSet::default(), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let mut game = GameSession::new(4);
    game.start();
    let snap = game.snapshot();
    let fb = GameView::default().render(&snap, &PhotoSet::default(), Viewport::new(22, 22));

    for (x, y) in snap.active.unwrap().cells() {
        let px = 1 + x as u16 * 2;
        let py = 1 + y as u16;
        assert_eq!(fb.get(px, py).unwrap().ch, '█');
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameSession::new(1);
    game.start();
    let mut snap = game.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let fb = GameView::default().render(&snap, &PhotoSet::default(), Viewport::new(60, 22));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("NEXT"));
    assert!(all.contains("PHOTO"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameSession::new(1).snapshot();
    let fb = GameView::default().render(&snap, &PhotoSet::default(), Viewport::new(22, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSession::new(1).snapshot();
    let fb = GameView::default().render(&snap, &PhotoSet::default(), Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_overlays_follow_phase() {
    let view = GameView::default();
    let photos = PhotoSet::default();
    let vp = Viewport::new(22, 22);

    let mut snap = GameSnapshot::default();
    assert!(screen_text(&view.render(&snap, &photos, vp)).contains("PRESS ENTER"));

    snap.phase = Phase::GameOver;
    assert!(screen_text(&view.render(&snap, &photos, vp)).contains("GAME OVER"));

    snap.phase = Phase::Won;
    assert!(screen_text(&view.render(&snap, &photos, vp)).contains("YOU WIN!"));

    snap.phase = Phase::Running;
    let text = screen_text(&view.render(&snap, &photos, vp));
    assert!(!text.contains("GAME OVER"));
    assert!(!text.contains("PRESS ENTER"));
}

#[test]
fn term_view_paints_photo_tiles() {
    let photos = PhotoSet::from_photos(vec![flat_photo(10, 200, 30), flat_photo(1, 2, 3)]);
    let mut snap = GameSnapshot::default();
    snap.phase = Phase::Running;
    snap.grid[19][0] = Cell::Photo(1);
    snap.grid[19][1] = Cell::Photo(2);

    let fb = GameView::default().render(&snap, &photos, Viewport::new(22, 22));
    assert_eq!(fb.get(1, 20).unwrap().style.fg, Rgb::new(1, 2, 3));
    // Index 2 wraps back to the first photo.
    assert_eq!(fb.get(3, 20).unwrap().style.fg, Rgb::new(10, 200, 30));
}

#[test]
fn term_view_blends_revealed_rows() {
    let photos = PhotoSet::from_photos(vec![flat_photo(10, 200, 30)]);
    let mut snap = GameSnapshot::default();
    snap.phase = Phase::Running;
    snap.reveal_alpha[19] = 1.0;
    snap.reveal_alpha[18] = 0.5;

    let fb = GameView::default().render(&snap, &photos, Viewport::new(22, 22));
    assert_eq!(fb.get(1, 20).unwrap().style.bg, Rgb::new(10, 200, 30));
    assert_eq!(fb.get(1, 19).unwrap().style.bg, Rgb::new(20, 115, 35));
    assert_eq!(fb.get(1, 18).unwrap().ch, '·');
}

#[test]
fn term_view_reveal_without_photos_uses_fallback() {
    let mut snap = GameSnapshot::default();
    snap.reveal_alpha[19] = 1.0;
    let fb = GameView::default().render(&snap, &PhotoSet::default(), Viewport::new(22, 22));
    assert_eq!(fb.get(5, 20).unwrap().style.bg, FALLBACK_TILE);
}

fn panel_text(snap: &GameSnapshot) -> String {
    let fb = GameView::default().render(snap, &PhotoSet::default(), Viewport::new(60, 22));
    screen_text(&fb)
}

#[test]
fn term_view_photo_progress_counts_towards_goal() {
    let mut snap = GameSnapshot::default();
    snap.phase = Phase::Running;
    snap.revealed_rows = 3;

    snap.reveal_goal = Some(8);
    assert!(panel_text(&snap).contains("3  /8"));

    snap.reveal_goal = None;
    assert!(panel_text(&snap).contains("3  /20"));
}

#[test]
fn term_view_names_next_piece() {
    let mut snap = GameSnapshot::default();
    snap.next = Some(PieceKind::Z);
    assert!(panel_text(&snap).contains("NEXT Z"));
}
