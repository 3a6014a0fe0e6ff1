//! Grid module - the per-level tile table
//!
//! The grid is a 10x10 table where each cell holds a [`CellKind`].
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (col, row) where col ranges 0..9 (west to east), row ranges 0..9 (north to south).
//! Anything outside the table classifies as `Void`.

use crate::error::LayoutError;
use crate::types::{CellKind, Pos, GRID_SIZE};

/// `[row][col]` copy of a grid
pub type TileRows = [[CellKind; GRID_SIZE as usize]; GRID_SIZE as usize];

/// Total number of cells in the grid
const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Immutable tile table, row-major order (row * GRID_SIZE + col)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [CellKind; GRID_CELLS],
}

impl Grid {
    /// A grid with every cell `Void`
    pub fn empty() -> Self {
        Self {
            cells: [CellKind::Void; GRID_CELLS],
        }
    }

    /// Parse a layout, one string per row, one character per column.
    ///
    /// See [`CellKind::from_char`] for the tile alphabet.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        if rows.len() != GRID_SIZE as usize {
            return Err(LayoutError::RowCount { found: rows.len() });
        }

        let mut grid = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != GRID_SIZE as usize {
                return Err(LayoutError::RowWidth { row, found: width });
            }
            for (col, ch) in line.chars().enumerate() {
                let kind =
                    CellKind::from_char(ch).ok_or(LayoutError::UnknownTile { col, row, ch })?;
                grid.cells[row * GRID_SIZE as usize + col] = kind;
            }
        }
        Ok(grid)
    }

    #[inline(always)]
    fn index(pos: Pos) -> Option<usize> {
        if !pos.in_grid() {
            return None;
        }
        Some((pos.row as usize) * (GRID_SIZE as usize) + (pos.col as usize))
    }

    /// Classify a cell. Out-of-grid coordinates are `Void`.
    pub fn get(&self, pos: Pos) -> CellKind {
        Self::index(pos)
            .map(|i| self.cells[i])
            .unwrap_or(CellKind::Void)
    }

    /// Same as [`Grid::get`], taking raw coordinates.
    pub fn classify(&self, col: i8, row: i8) -> CellKind {
        self.get(Pos::new(col, row))
    }

    /// Positions of every cell of `kind`, in row-major order
    pub fn positions(&self, kind: CellKind) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, &k)| k == kind)
            .map(|(i, _)| {
                Pos::new(
                    (i % GRID_SIZE as usize) as i8,
                    (i / GRID_SIZE as usize) as i8,
                )
            })
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Fill an existing `[row][col]` table without allocating
    pub fn write_rows(&self, out: &mut TileRows) {
        for (i, &kind) in self.cells.iter().enumerate() {
            out[i / GRID_SIZE as usize][i % GRID_SIZE as usize] = kind;
        }
    }

    /// Render back into the layout alphabet
    pub fn to_layout(&self) -> Vec<String> {
        self.cells
            .chunks(GRID_SIZE as usize)
            .map(|row| row.iter().map(|k| k.as_char()).collect())
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}
