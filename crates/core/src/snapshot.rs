//! Read-only views of the game for collaborators.
//!
//! [`GameSnapshot`] is a plain copy of everything a renderer needs and serializes
//! to JSON as-is. [`project`] overlays the falling piece onto the locked grid for
//! drawing; the result is never fed back into the engine.

use serde::Serialize;

use crate::pieces::Tetromino;
use crate::types::{Grid, BOARD_HEIGHT, BOARD_WIDTH};

/// Locked cells with the falling piece merged in.
pub type DisplayGrid = Grid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Locked cells only, `board[y][x]`
    pub board: Grid,
    pub current: Tetromino,
    pub next: Tetromino,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub game_over: bool,
    pub paused: bool,
    pub started: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.started && !self.game_over && !self.paused
    }

    /// Board with the current piece drawn in
    pub fn display_grid(&self) -> DisplayGrid {
        project(&self.board, &self.current)
    }
}

/// Overlay `piece` onto a copy of `board`. Cells outside the grid are skipped.
pub fn project(board: &Grid, piece: &Tetromino) -> DisplayGrid {
    let mut out = *board;
    for (x, y) in piece.cells() {
        if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
            out[y as usize][x as usize] = Some(piece.kind);
        }
    }
    out
}
