//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same random source produces identical games
//! - **Testable**: Every rule is a plain function or method on owned state
//! - **Portable**: Runs behind a terminal, a browser bridge or headless
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with locking and line clearing
//! - [`pieces`]: Tetromino bitmask catalog and rotation
//! - [`collision`]: The movement/rotation validity predicate and drop distance
//! - [`rng`]: Injectable random source and uniform piece generator
//! - [`scoring`]: Level, gravity interval and points
//! - [`scheduler`]: Timestamp-driven gravity clock
//! - [`game_state`]: Complete game state and the command surface
//! - [`snapshot`]: Read-only snapshots and the display projection
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every piece is drawn independently; repeats happen
//! - **Bitmask rotation**: 90° clockwise, no wall kicks
//! - **No lock delay**: a piece locks on the first gravity tick it cannot descend
//! - **Hard drop**: moves to the landing row; locking is left to gravity
//! - **Scoring**: `lines * 100 * level`, +1 per soft-drop row, +2 per hard-drop row
//!
//! # Example
//!
//! ```
//! use tetris_lite_core::GameState;
//! use tetris_lite_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.new_game();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//! assert!(game.score() > 0); // Hard drop awards points
//!
//! // Gravity: the first tick sets the clock, the next one locks the landed piece.
//! game.tick(0);
//! game.tick(1000);
//! assert_eq!(game.current().y, 0);
//! ```
//!
//! # Timing
//!
//! [`GameState::tick`](game_state::GameState::tick) takes a monotonic timestamp in
//! milliseconds. Call it from every frame; it steps gravity only when the level's
//! drop interval has passed since the previous step.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use tetris_lite_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{drop_distance, is_valid_move, try_rotate};
pub use game_state::GameState;
pub use pieces::{base_shape, Shape, Tetromino};
pub use rng::{PieceGenerator, RandomSource, SimpleRng};
pub use scheduler::TickScheduler;
pub use scoring::{calculate_drop_score, calculate_level, calculate_line_score, get_drop_interval_ms};
pub use snapshot::{project, DisplayGrid, GameSnapshot};
