//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`] commands. The
//! engine never sees key codes; swapping devices only means swapping this crate.

pub mod map;

pub use tetris_lite_types as types;

pub use map::{handle_key_event, should_quit};
