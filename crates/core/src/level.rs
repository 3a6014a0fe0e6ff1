//! Level data - validated layouts, spawn cells, and level packs
//!
//! Levels are plain text layouts (see [`CellKind::from_char`]) with a spawn
//! cell. They can be compiled in ([`LevelPack::builtin`]) or loaded from a
//! JSON pack:
//!
//! ```json
//! { "levels": [ { "name": "First Steps", "spawn": [0, 0], "rows": ["####......", "..."] } ] }
//! ```
//!
//! Validation happens once at load time; a loaded [`Level`] is immutable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LevelError};
use crate::grid::Grid;
use crate::types::{CellKind, Pos, MAX_LEVELS};

/// Serialized form of one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub name: String,
    /// `[col, row]`
    pub spawn: [i8; 2],
    pub rows: Vec<String>,
}

/// Serialized form of a level pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPackSpec {
    pub levels: Vec<LevelSpec>,
}

const LEVEL_1_ROWS: [&str; 10] = [
    "####......",
    "...T......",
    "..FT......",
    "..###.....",
    "...B......",
    "...B......",
    "...#......",
    "...#......",
    "...#......",
    "...G......",
];

const LEVEL_2_ROWS: [&str; 10] = [
    "#####.....",
    "#####.....",
    "#FF##.....",
    "####TT#...",
    "....BB....",
    "....####..",
    "......####",
    "......###.",
    "......FFG.",
    "..........",
];

/// One validated level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    name: String,
    grid: Grid,
    spawn: Pos,
    goal: Pos,
    trigger: Option<[Pos; 2]>,
}

impl Level {
    /// Build and validate a level from its layout rows.
    pub fn from_rows<S: AsRef<str>>(
        name: impl Into<String>,
        spawn: Pos,
        rows: &[S],
    ) -> Result<Self, LayoutError> {
        let grid = Grid::from_rows(rows)?;

        let goals: Vec<Pos> = grid.positions(CellKind::Goal).collect();
        let goal = match goals.as_slice() {
            [only] => *only,
            _ => return Err(LayoutError::GoalCount { found: goals.len() }),
        };

        let triggers: Vec<Pos> = grid.positions(CellKind::BridgeTrigger).collect();
        let trigger = match triggers.as_slice() {
            [] => None,
            [first, second] => {
                if !adjacent(*first, *second) {
                    return Err(LayoutError::TriggerNotAdjacent {
                        first: *first,
                        second: *second,
                    });
                }
                Some([*first, *second])
            }
            _ => {
                return Err(LayoutError::TriggerCount {
                    found: triggers.len(),
                })
            }
        };

        if trigger.is_none() && grid.count(CellKind::Bridge) > 0 {
            return Err(LayoutError::BridgeWithoutTrigger);
        }

        if !spawn.in_grid() {
            return Err(LayoutError::SpawnOutOfGrid { spawn });
        }
        let spawn_kind = grid.get(spawn);
        if spawn_kind != CellKind::Normal {
            return Err(LayoutError::SpawnNotFloor {
                spawn,
                kind: spawn_kind,
            });
        }

        Ok(Self {
            name: name.into(),
            grid,
            spawn,
            goal,
            trigger,
        })
    }

    /// Build from the serialized form; `number` is 1-based and only used in errors.
    pub fn from_spec(number: usize, spec: &LevelSpec) -> Result<Self, LevelError> {
        let spawn = Pos::new(spec.spawn[0], spec.spawn[1]);
        Self::from_rows(spec.name.clone(), spawn, &spec.rows).map_err(|reason| {
            LevelError::Invalid {
                level: number,
                name: spec.name.clone(),
                reason,
            }
        })
    }

    pub fn to_spec(&self) -> LevelSpec {
        LevelSpec {
            name: self.name.clone(),
            spawn: [self.spawn.col, self.spawn.row],
            rows: self.grid.to_layout(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn spawn(&self) -> Pos {
        self.spawn
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// The two cells that flip the bridge switch, if the level has a bridge
    pub fn trigger(&self) -> Option<[Pos; 2]> {
        self.trigger
    }

    /// Classify a cell; out-of-grid is `Void`
    pub fn classify(&self, pos: Pos) -> CellKind {
        self.grid.get(pos)
    }
}

fn adjacent(a: Pos, b: Pos) -> bool {
    let dc = (a.col as i16 - b.col as i16).abs();
    let dr = (a.row as i16 - b.row as i16).abs();
    dc + dr == 1
}

/// Ordered, validated levels for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelPack {
    levels: Vec<Level>,
}

impl LevelPack {
    /// The two compiled-in levels
    pub fn builtin() -> Result<Self, LevelError> {
        Self::from_spec(&Self::builtin_spec())
    }

    pub fn builtin_spec() -> LevelPackSpec {
        LevelPackSpec {
            levels: vec![
                LevelSpec {
                    name: "First Steps".to_string(),
                    spawn: [0, 0],
                    rows: LEVEL_1_ROWS.iter().map(|s| s.to_string()).collect(),
                },
                LevelSpec {
                    name: "Crossing".to_string(),
                    spawn: [0, 0],
                    rows: LEVEL_2_ROWS.iter().map(|s| s.to_string()).collect(),
                },
            ],
        }
    }

    pub fn from_spec(spec: &LevelPackSpec) -> Result<Self, LevelError> {
        if spec.levels.is_empty() {
            return Err(LevelError::EmptyPack);
        }
        if spec.levels.len() > MAX_LEVELS {
            return Err(LevelError::TooManyLevels {
                found: spec.levels.len(),
            });
        }

        let levels = spec
            .levels
            .iter()
            .enumerate()
            .map(|(i, level)| Level::from_spec(i + 1, level))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { levels })
    }

    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let spec: LevelPackSpec = serde_json::from_str(json)?;
        Self::from_spec(&spec)
    }

    /// Read and validate a JSON level pack file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn to_spec(&self) -> LevelPackSpec {
        LevelPackSpec {
            levels: self.levels.iter().map(Level::to_spec).collect(),
        }
    }

    /// Number of levels (at least 1)
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level 1. A pack is never empty.
    pub fn first(&self) -> &Level {
        &self.levels[0]
    }

    /// Level by 1-based number
    pub fn get(&self, number: u8) -> Option<&Level> {
        (number as usize)
            .checked_sub(1)
            .and_then(|i| self.levels.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
