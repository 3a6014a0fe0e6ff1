//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into discrete [`crate::types::GameAction`]s.
//! Only key presses produce actions, so one physical press is at most one
//! roll no matter how fast frames run or how the terminal reports repeats.

pub mod map;

pub use tui_block_roll_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
