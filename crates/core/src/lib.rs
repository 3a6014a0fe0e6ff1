//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the rolling-block puzzle: level layouts,
//! the block and its tumble table, the bridge switch, the move resolver and
//! the level/score controller. It has **no dependencies** on the terminal,
//! input devices or wall-clock time; moves are discrete events.
//!
//! # Module Structure
//!
//! - [`grid`]: 10x10 tile table, out-of-grid lookups are `Void`
//! - [`level`]: validated levels and level packs (built-in or JSON)
//! - [`block`]: orientation, footprint and the tumble transition table
//! - [`bridge`]: the per-attempt bridge switch
//! - [`resolver`]: `resolve_move`, the puzzle state machine
//! - [`session`]: per-level scores, level progression and the win flag
//! - [`game_state`]: the aggregate the host owns
//! - [`snapshot`]: plain copy of the state for rendering
//!
//! # Rules
//!
//! - **Fall**: any footprint cell on `Void` resets the block to spawn
//! - **Fragile**: any footprint cell on a fragile tile resets
//! - **Bridge**: bridge tiles are floor only while the switch is ON
//! - **Trigger**: lying exactly on the trigger pair flips the switch
//! - **Goal**: standing upright on the goal clears the level
//! - **Score**: +1 per non-reset move; a reset falls back to the level's base
//!
//! # Example
//!
//! ```
//! use tui_block_roll_core::{GameState, LevelPack, MoveOutcome};
//! use tui_block_roll_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(LevelPack::builtin().unwrap());
//!
//! assert_eq!(
//!     game.apply_action(GameAction::Move(Direction::East)),
//!     Some(MoveOutcome::Moved)
//! );
//! assert_eq!(game.score(), 1);
//!
//! // Straight off the north edge
//! game.apply_action(GameAction::Move(Direction::North));
//! assert_eq!(game.score(), 0);
//! ```

pub mod block;
pub mod bridge;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod level;
pub mod resolver;
pub mod session;
pub mod snapshot;

pub use tui_block_roll_types as types;

// Re-export commonly used types for convenience
pub use block::{Block, Footprint};
pub use bridge::BridgeSwitch;
pub use error::{LayoutError, LevelError};
pub use game_state::GameState;
pub use grid::{Grid, TileRows};
pub use level::{Level, LevelPack, LevelPackSpec, LevelSpec};
pub use resolver::{resolve_move, MoveOutcome, PuzzleState, ResetCause};
pub use session::{LevelSession, Progress, SessionStatus};
pub use snapshot::GameSnapshot;
