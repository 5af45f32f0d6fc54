//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Tetromino};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

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
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG);
        let grid = snap.display_grid();
        for (y, row) in grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(kind) => ('█', CellStyle::new(piece_color(*kind), PLAY_BG)),
                    None => ('·', empty),
                };
                let px = start_x + 1 + (x as u16) * self.cell_w;
                fb.fill_rect(px, start_y + 1 + y as u16, self.cell_w, 1, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + 2, start_y);

        let overlay = if !snap.started {
            Some("PRESS N")
        } else if snap.game_over {
            Some("GAME OVER")
        } else if snap.paused {
            Some("PAUSED")
        } else {
            None
        };
        if let Some(text) = overlay {
            let text_w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_str(x, start_y + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::default();
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

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, start_y: u16) {
        if x >= fb.width() {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = start_y;
        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        self.draw_preview(fb, &snap.next, x, y + 1);
    }

    /// Next piece drawn from its shape bitmask, independent of its board anchor.
    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &Tetromino, x: u16, y: u16) {
        let style = CellStyle::new(piece_color(piece.kind), Rgb::new(0, 0, 0));
        for (dx, dy) in piece.shape.minos() {
            let px = x + (dx as u16) * self.cell_w;
            fb.fill_rect(px, y + dy as u16, self.cell_w, 1, '█', style);
        }
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
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
    use crate::core::GameState;

    #[test]
    fn piece_colors_are_distinct() {
        let mut colors: Vec<_> = PieceKind::ALL.iter().map(|k| piece_color(*k)).collect();
        colors.sort_by_key(|c| (c.r, c.g, c.b));
        colors.dedup();
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn narrow_viewport_does_not_panic() {
        let mut state = GameState::new(1);
        state.new_game();
        let fb = GameView::default().render(&state.snapshot(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
