//! TUI Block Roll (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_block_roll::{core,input,term,types}`
//! and hosts the pieces only the binary needs: configuration, the session
//! log and the [`app::App`] that ties them to the puzzle.

pub mod app;
pub mod config;
pub mod session_log;

pub use tui_block_roll_core as core;
pub use tui_block_roll_input as input;
pub use tui_block_roll_term as term;
pub use tui_block_roll_types as types;
