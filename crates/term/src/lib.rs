//! Terminal front-end for the engine.
//!
//! Renders [`core::GameSnapshot`]s into a character framebuffer and flushes it to
//! the terminal through crossterm. Nothing here decides game rules; it only draws
//! what the snapshot says.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_lite_core as core;
pub use tetris_lite_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
