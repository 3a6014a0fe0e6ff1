//! Level-data errors
//!
//! Gameplay resets are not errors; they come back as
//! [`MoveOutcome::Reset`](crate::resolver::MoveOutcome::Reset). The only
//! error category in the core is malformed or missing level data, which is
//! fatal at load time.

use std::fmt;

use crate::types::{CellKind, Pos};

/// Problem with a single level layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout must have exactly `GRID_SIZE` rows
    RowCount { found: usize },
    /// Every row must have exactly `GRID_SIZE` tiles
    RowWidth { row: usize, found: usize },
    UnknownTile { col: usize, row: usize, ch: char },
    /// Exactly one goal cell is required
    GoalCount { found: usize },
    /// Bridge triggers come in pairs (or not at all)
    TriggerCount { found: usize },
    TriggerNotAdjacent { first: Pos, second: Pos },
    /// Bridge cells can never be crossed without a trigger pair
    BridgeWithoutTrigger,
    SpawnOutOfGrid { spawn: Pos },
    SpawnNotFloor { spawn: Pos, kind: CellKind },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::RowCount { found } => write!(f, "expected 10 rows, found {}", found),
            LayoutError::RowWidth { row, found } => {
                write!(f, "row {} has {} tiles, expected 10", row, found)
            }
            LayoutError::UnknownTile { col, row, ch } => {
                write!(f, "unknown tile {:?} at ({}, {})", ch, col, row)
            }
            LayoutError::GoalCount { found } => {
                write!(f, "expected exactly one goal tile, found {}", found)
            }
            LayoutError::TriggerCount { found } => {
                write!(f, "expected 0 or 2 bridge trigger tiles, found {}", found)
            }
            LayoutError::TriggerNotAdjacent { first, second } => write!(
                f,
                "bridge trigger tiles ({}, {}) and ({}, {}) are not adjacent",
                first.col, first.row, second.col, second.row
            ),
            LayoutError::BridgeWithoutTrigger => {
                write!(f, "bridge tiles present but no bridge trigger pair")
            }
            LayoutError::SpawnOutOfGrid { spawn } => {
                write!(f, "spawn ({}, {}) is outside the grid", spawn.col, spawn.row)
            }
            LayoutError::SpawnNotFloor { spawn, kind } => write!(
                f,
                "spawn ({}, {}) is on a {} tile, expected normal floor",
                spawn.col,
                spawn.row,
                kind.as_str()
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Failure to load a level pack
#[derive(Debug)]
pub enum LevelError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    EmptyPack,
    TooManyLevels { found: usize },
    /// `level` is 1-based
    Invalid {
        level: usize,
        name: String,
        reason: LayoutError,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io { path, source } => {
                write!(f, "cannot read level pack {}: {}", path, source)
            }
            LevelError::Parse(e) => write!(f, "invalid level pack JSON: {}", e),
            LevelError::EmptyPack => write!(f, "level pack contains no levels"),
            LevelError::TooManyLevels { found } => write!(
                f,
                "level pack contains {} levels, at most {} are supported",
                found,
                crate::types::MAX_LEVELS
            ),
            LevelError::Invalid {
                level,
                name,
                reason,
            } => write!(f, "level {} ({}): {}", level, name, reason),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Io { source, .. } => Some(source),
            LevelError::Parse(e) => Some(e),
            LevelError::Invalid { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(value: serde_json::Error) -> Self {
        LevelError::Parse(value)
    }
}
