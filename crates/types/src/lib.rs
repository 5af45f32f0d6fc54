//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the engine, the terminal front-end
//! and any JSON consumer of game snapshots.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Progression Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_DROP_MS` | 50 | Interval floor |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines per level |
//! | `LINE_CLEAR_POINTS` | 100 | Points per cleared line, times level |
//! | `SOFT_DROP_POINTS` | 1 | Points per soft-dropped row |
//! | `HARD_DROP_POINTS` | 2 | Points per hard-dropped row |
//!
//! # Examples
//!
//! ```
//! use tetris_lite_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default front-end frame interval in milliseconds (~60 FPS).
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level gained.
pub const DROP_STEP_MS: u32 = 100;

/// Gravity interval floor.
pub const MIN_DROP_MS: u32 = 50;

/// Cleared lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the level at lock time.
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Points per row descended by a soft drop.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row descended by a hard drop.
pub const HARD_DROP_POINTS: u32 = 2;

/// The seven tetromino piece kinds
///
/// Display colours (front-end only):
/// - **I**: Cyan
/// - **O**: Yellow
/// - **T**: Magenta
/// - **S**: Green
/// - **Z**: Red
/// - **J**: Blue
/// - **L**: Orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Catalog order. Generators index into this table.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_lite_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Commands a collaborator can issue to the engine.
///
/// Input bindings map devices onto these; the engine never sees key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reset everything and start playing
    NewGame,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (+1 point per row)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Move piece to its landing row (+2 points per row), locked by the next tick
    HardDrop,
    /// Toggle pause state
    TogglePause,
}

impl GameAction {
    /// Parse action from its camelCase command name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_lite_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("togglepause"), Some(GameAction::TogglePause));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newgame" => Some(GameAction::NewGame),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "togglepause" => Some(GameAction::TogglePause),
            _ => None,
        }
    }

    /// Convert to camelCase command name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::NewGame => "newGame",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::TogglePause => "togglePause",
        }
    }
}

/// Outcome of the most recent lock, recorded by the engine for observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub game_over: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Occupied by a locked cell of the given kind
pub type Cell = Option<PieceKind>;

/// Row-major cell grid, `grid[y][x]`.
pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
