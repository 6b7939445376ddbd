//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{shape_for, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::photo::{PhotoSet, FALLBACK_TILE};
use crate::types::{Cell, Phase, PieceKind, Rotation, COLS, ROWS};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        photos: &PhotoSet,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let well_w = (COLS as u16) * self.cell_w;
        let well_h = (ROWS as u16) * self.cell_h;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, origin.x, origin.y, frame_w, frame_h, border);

        for y in 0..ROWS {
            for x in 0..COLS {
                let (ch, style) = locked_cell_look(snap, photos, x, y);
                self.fill_cell(fb, origin, x as u16, y as u16, ch, style);
            }
        }

        if let Some(active) = snap.active {
            let style = CellStyle {
                bold: true,
                ..CellStyle::plain(kind_color(active.kind), WELL_BG)
            };
            for (x, y) in active.cells() {
                if x >= 0 && (x as usize) < COLS && y >= 0 && (y as usize) < ROWS {
                    self.fill_cell(fb, origin, x as u16, y as u16, '█', style);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        match snap.phase {
            Phase::Idle => self.draw_overlay_text(fb, origin, frame_w, frame_h, "PRESS ENTER"),
            Phase::GameOver => self.draw_overlay_text(fb, origin, frame_w, frame_h, "GAME OVER"),
            Phase::Won => self.draw_overlay_text(fb, origin, frame_w, frame_h, "YOU WIN!"),
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, photos: &PhotoSet, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, photos, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.x + 1 + cell_x * self.cell_w;
        let py = origin.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        origin: Origin,
        frame_w: u16,
    ) {
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG)
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = origin.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level as u32),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        // Progress towards the win, or towards a full photo when there is no goal.
        let target = snap.reveal_goal.unwrap_or(ROWS as u8);
        let revealed = snap.revealed_rows.min(target);
        fb.put_str(panel_x, y, "PHOTO", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, revealed as u32, value);
        fb.put_char(panel_x + 3, y, '/', value);
        fb.put_u32(panel_x + 4, y, target as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(kind) = snap.next {
            let style = CellStyle::plain(kind_color(kind), PANEL_BG);
            fb.put_str(panel_x + 5, y, kind.letter(), style);
            let top = y.saturating_add(1);
            for (dx, dy) in shape_for(kind, Rotation::North).cells() {
                let px = panel_x + dx as u16 * 2;
                let py = top + dy as u16;
                fb.put_str(px, py, "██", style);
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = origin.y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = origin.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG)
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Top-left corner of the well frame
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

/// Glyph and style of a locked (or empty) grid cell
fn locked_cell_look(snap: &GameSnapshot, photos: &PhotoSet, x: usize, y: usize) -> (char, CellStyle) {
    let background = || {
        photos
            .background()
            .map(|p| p.tile(x, y))
            .unwrap_or(FALLBACK_TILE)
    };

    match snap.grid[y][x] {
        Cell::Empty => {
            let alpha = snap.reveal_alpha[y];
            if alpha > 0.0 {
                let bg = WELL_BG.mix(background(), alpha);
                (' ', CellStyle::plain(bg, bg))
            } else {
                let dot = CellStyle {
                    dim: true,
                    ..CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG)
                };
                ('·', dot)
            }
        }
        Cell::Block(kind) => ('█', CellStyle::plain(kind_color(kind), WELL_BG)),
        Cell::Photo(index) => {
            let color = photos.tile(index, x, y).unwrap_or(FALLBACK_TILE);
            ('█', CellStyle::plain(color, WELL_BG))
        }
        Cell::Revealed => {
            let bg = background();
            (' ', CellStyle::plain(bg, bg))
        }
    }
}

pub fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_without_reveal_is_a_dot() {
        let snap = GameSnapshot::default();
        let (ch, _) = locked_cell_look(&snap, &PhotoSet::default(), 3, 3);
        assert_eq!(ch, '·');
    }

    #[test]
    fn revealed_row_falls_back_to_flat_colour() {
        let mut snap = GameSnapshot::default();
        snap.reveal_alpha[19] = 1.0;
        let (ch, style) = locked_cell_look(&snap, &PhotoSet::default(), 0, 19);
        assert_eq!(ch, ' ');
        assert_eq!(style.bg, FALLBACK_TILE);
    }

    #[test]
    fn photo_cell_without_photos_uses_fallback() {
        let mut snap = GameSnapshot::default();
        snap.grid[5][5] = Cell::Photo(2);
        let (_, style) = locked_cell_look(&snap, &PhotoSet::default(), 5, 5);
        assert_eq!(style.fg, FALLBACK_TILE);
    }
}
