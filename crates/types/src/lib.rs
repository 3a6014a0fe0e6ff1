//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (puzzle rules, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! Every level is played on a fixed square grid:
//!
//! - **Columns**: 10 (indexed 0-9, the x axis, grows EAST)
//! - **Rows**: 10 (indexed 0-9, the z axis, grows SOUTH)
//!
//! # Frame Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default frame interval (~60 FPS) |
//! | `CAMERA_DEG_PER_SEC` | 90 | Tower-view rotation speed |
//! | `CAMERA_WRAP_DEG` | 720 | Rotation angle wraps past this value |
//! | `CAMERA_START_DEG` | 90 | Initial camera angle |
//!
//! Puzzle moves never depend on these values: the rules consume discrete
//! directional events only.
//!
//! # Examples
//!
//! ```
//! use tui_block_roll_types::{CellKind, Direction, GameAction, Orientation, GRID_SIZE};
//!
//! assert_eq!(CellKind::from_char('T'), Some(CellKind::BridgeTrigger));
//! assert_eq!(Direction::from_str("e"), Some(Direction::East));
//! assert_eq!(Direction::North.opposite(), Direction::South);
//! assert_eq!(
//!     GameAction::from_str("moveWest"),
//!     Some(GameAction::Move(Direction::West))
//! );
//! assert!(Orientation::Upright.axis().is_none());
//! assert_eq!(GRID_SIZE, 10);
//! ```

/// Grid width and height in cells (10x10)
pub const GRID_SIZE: u8 = 10;

/// Maximum number of levels a level pack may contain.
///
/// The scoreboard shows the level as a single seven-segment digit.
pub const MAX_LEVELS: usize = 9;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Camera rotation speed in tower view (degrees per second of real time)
pub const CAMERA_DEG_PER_SEC: f32 = 90.0;

/// Camera angle wraps back by this amount once exceeded
pub const CAMERA_WRAP_DEG: f32 = 720.0;

/// Camera angle at session start
pub const CAMERA_START_DEG: f32 = 90.0;


/// Classification of a single grid cell
///
/// - **Void**: nothing to stand on (also every out-of-grid coordinate)
/// - **Normal**: plain floor
/// - **Fragile**: breaks under any part of the block
/// - **Bridge**: floor only while the bridge switch is ON
/// - **BridgeTrigger**: one of the two cells that flip the bridge switch
/// - **Goal**: the exit hole; the block must stand upright on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Void,
    Normal,
    Fragile,
    Bridge,
    BridgeTrigger,
    Goal,
}

impl CellKind {
    /// All kinds, in declaration order.
    pub const ALL: [CellKind; 6] = [
        CellKind::Void,
        CellKind::Normal,
        CellKind::Fragile,
        CellKind::Bridge,
        CellKind::BridgeTrigger,
        CellKind::Goal,
    ];

    /// Parse a level-layout character
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_block_roll_types::CellKind;
    ///
    /// assert_eq!(CellKind::from_char('.'), Some(CellKind::Void));
    /// assert_eq!(CellKind::from_char('#'), Some(CellKind::Normal));
    /// assert_eq!(CellKind::from_char('G'), Some(CellKind::Goal));
    /// assert_eq!(CellKind::from_char('?'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(CellKind::Void),
            '#' => Some(CellKind::Normal),
            'F' => Some(CellKind::Fragile),
            'B' => Some(CellKind::Bridge),
            'T' => Some(CellKind::BridgeTrigger),
            'G' => Some(CellKind::Goal),
            _ => None,
        }
    }

    /// Level-layout character for this kind
    pub fn as_char(&self) -> char {
        match self {
            CellKind::Void => '.',
            CellKind::Normal => '#',
            CellKind::Fragile => 'F',
            CellKind::Bridge => 'B',
            CellKind::BridgeTrigger => 'T',
            CellKind::Goal => 'G',
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Void => "void",
            CellKind::Normal => "normal",
            CellKind::Fragile => "fragile",
            CellKind::Bridge => "bridge",
            CellKind::BridgeTrigger => "bridge_trigger",
            CellKind::Goal => "goal",
        }
    }
}

/// A horizontal grid axis
///
/// - **X**: columns (WEST/EAST)
/// - **Z**: rows (NORTH/SOUTH)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// Unit step along this axis as `(d_col, d_row)`
    pub fn unit(&self) -> (i8, i8) {
        match self {
            Axis::X => (1, 0),
            Axis::Z => (0, 1),
        }
    }
}

/// Directional roll input
///
/// NORTH decreases the row, SOUTH increases it; WEST decreases the column,
/// EAST increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "south" | "s", "east" | "e", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Axis the roll travels along
    pub fn axis(&self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Z,
            Direction::East | Direction::West => Axis::X,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// How the 1x1x2 block currently rests on the grid
///
/// - **Upright**: standing on one cell
/// - **LyingX**: lying across two cells along the column axis
/// - **LyingZ**: lying across two cells along the row axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Upright,
    LyingX,
    LyingZ,
}

impl Orientation {
    /// Long axis of a lying block, `None` when upright
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Orientation::Upright => None,
            Orientation::LyingX => Some(Axis::X),
            Orientation::LyingZ => Some(Axis::Z),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Upright => "upright",
            Orientation::LyingX => "lying_x",
            Orientation::LyingZ => "lying_z",
        }
    }
}

/// Grid coordinate `(col, row)`
///
/// Signed so that a roll off the edge is representable; anything outside
/// `0..GRID_SIZE` classifies as [`CellKind::Void`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub col: i8,
    pub row: i8,
}

impl Pos {
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    pub fn offset(&self, d_col: i8, d_row: i8) -> Self {
        Self {
            col: self.col.saturating_add(d_col),
            row: self.row.saturating_add(d_row),
        }
    }

    /// Neighbor one cell further along `axis`
    pub fn step(&self, axis: Axis) -> Self {
        let (c, r) = axis.unit();
        self.offset(c, r)
    }

    pub fn in_grid(&self) -> bool {
        self.col >= 0 && self.col < GRID_SIZE as i8 && self.row >= 0 && self.row < GRID_SIZE as i8
    }
}

/// Actions delivered by the input adapter
///
/// Only `Move` reaches the puzzle rules; the view toggles belong to the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Roll the block one tumble in the given direction
    Move(Direction),
    /// Switch between top view and tower view
    ToggleTopView,
    /// Start/stop continuous camera rotation (tower view only)
    ToggleRotation,
    /// Restart the session from the first level
    Restart,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_block_roll_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveNorth"), Some(GameAction::Move(Direction::North)));
    /// assert_eq!(GameAction::from_str("toggleTopView"), Some(GameAction::ToggleTopView));
    /// assert_eq!(GameAction::from_str("quit"), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "movenorth" => Some(GameAction::Move(Direction::North)),
            "movesouth" => Some(GameAction::Move(Direction::South)),
            "moveeast" => Some(GameAction::Move(Direction::East)),
            "movewest" => Some(GameAction::Move(Direction::West)),
            "toggletopview" => Some(GameAction::ToggleTopView),
            "togglerotation" => Some(GameAction::ToggleRotation),
            "restart" => Some(GameAction::Restart),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::North) => "moveNorth",
            GameAction::Move(Direction::South) => "moveSouth",
            GameAction::Move(Direction::East) => "moveEast",
            GameAction::Move(Direction::West) => "moveWest",
            GameAction::ToggleTopView => "toggleTopView",
            GameAction::ToggleRotation => "toggleRotation",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}
