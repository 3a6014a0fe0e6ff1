use crate::block::{Block, Footprint};
use crate::grid::TileRows;
use crate::resolver::MoveOutcome;
use crate::session::SessionStatus;
use crate::types::{CellKind, Pos, GRID_SIZE};

/// Copy of everything a frame needs to draw, read out of [`crate::GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub tiles: TileRows,
    /// Active level, 1-based
    pub level: u8,
    pub level_count: u8,
    pub block: Block,
    pub bridge_on: bool,
    pub score: u32,
    /// `(ones, tens)` of `score`
    pub score_digits: (u8, u8),
    pub status: SessionStatus,
    pub episode_id: u32,
    /// Rolls resolved in this episode, resets included
    pub move_id: u32,
    pub last_outcome: Option<MoveOutcome>,
}

impl GameSnapshot {
    /// Tile at `pos`; out-of-grid is `Void`
    pub fn tile(&self, pos: Pos) -> CellKind {
        if !pos.in_grid() {
            return CellKind::Void;
        }
        self.tiles[pos.row as usize][pos.col as usize]
    }

    pub fn footprint(&self) -> Footprint {
        self.block.footprint()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: [[CellKind::Void; GRID_SIZE as usize]; GRID_SIZE as usize],
            level: 1,
            level_count: 1,
            block: Block::upright(Pos::default()),
            bridge_on: false,
            score: 0,
            score_digits: (0, 0),
            status: SessionStatus::Playing,
            episode_id: 0,
            move_id: 0,
            last_outcome: None,
        }
    }
}
