//! Tetris Lite (workspace facade crate).
//!
//! The engine, input mapping and terminal rendering live in dedicated crates under
//! `crates/`; this package re-exports them as `tetris_lite::{core,input,term,types}`
//! and adds the runner's configuration and event log.

pub mod config;
pub mod event_log;

pub use tetris_lite_core as core;
pub use tetris_lite_input as input;
pub use tetris_lite_term as term;
pub use tetris_lite_types as types;
