//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget/layout libraries and instead renders into a simple framebuffer
//! that is diffed and flushed to the terminal.
//!
//! - [`game_view`]: board, block, seven-segment scoreboard and banners
//! - [`camera`]: top/tower view and time-driven board rotation
//! - [`seven_seg`]: digit segment table and glyphs
//! - [`soundtrack`]: per-frame sound hook
//! - [`renderer`]: raw-mode terminal output with diff encoding

pub mod camera;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod seven_seg;
pub mod soundtrack;

pub use tui_block_roll_core as core;
pub use tui_block_roll_types as types;

pub use camera::{rotate_cell, Camera, ViewMode};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use seven_seg::{draw_digit, draw_pair, lit_segments, Segment};
pub use soundtrack::{Bell, Cue, Silent, Soundtrack};
