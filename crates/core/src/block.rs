//! Block state and the tumble transition table
//!
//! A lying block is stored as its anchor (the lower-coordinate cell) plus
//! its axis; the second footprint cell is always `anchor.step(axis)`, so the
//! footprint can never be non-adjacent.

use arrayvec::ArrayVec;

use crate::types::Orientation::{LyingX, LyingZ, Upright};
use crate::types::{Direction, Orientation, Pos};

/// Cells currently under the block (1 when upright, 2 when lying)
pub type Footprint = ArrayVec<Pos, 2>;

/// Result of one tumble: new orientation and anchor delta `(d_col, d_row)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Roll {
    to: Orientation,
    d_col: i8,
    d_row: i8,
}

const fn roll(to: Orientation, d_col: i8, d_row: i8) -> Roll {
    Roll { to, d_col, d_row }
}

/// Indexed by `[orientation][direction]`, directions in N, S, W, E order.
///
/// - Upright rolled along an axis lies down along it, two cells toward the roll
///   (anchor moves 1 forward or 2 back).
/// - Lying rolled along its own axis stands up just past the far cell.
/// - Lying rolled across its axis slides one cell.
const ROLLS: [[Roll; 4]; 3] = [
    // Upright
    [
        roll(LyingZ, 0, -2),
        roll(LyingZ, 0, 1),
        roll(LyingX, -2, 0),
        roll(LyingX, 1, 0),
    ],
    // LyingX
    [
        roll(LyingX, 0, -1),
        roll(LyingX, 0, 1),
        roll(Upright, -1, 0),
        roll(Upright, 2, 0),
    ],
    // LyingZ
    [
        roll(Upright, 0, -1),
        roll(Upright, 0, 2),
        roll(LyingZ, -1, 0),
        roll(LyingZ, 1, 0),
    ],
];

fn orientation_index(o: Orientation) -> usize {
    match o {
        Upright => 0,
        LyingX => 1,
        LyingZ => 2,
    }
}

fn direction_index(d: Direction) -> usize {
    match d {
        Direction::North => 0,
        Direction::South => 1,
        Direction::West => 2,
        Direction::East => 3,
    }
}

/// The 1x1x2 block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub orientation: Orientation,
    /// The occupied cell when upright; the lower-coordinate cell when lying
    pub anchor: Pos,
}

impl Block {
    pub fn upright(at: Pos) -> Self {
        Self {
            orientation: Upright,
            anchor: at,
        }
    }

    pub fn lying(orientation: Orientation, anchor: Pos) -> Self {
        Self {
            orientation,
            anchor,
        }
    }

    pub fn is_upright(&self) -> bool {
        self.orientation == Upright
    }

    pub fn footprint(&self) -> Footprint {
        let mut cells = Footprint::new();
        cells.push(self.anchor);
        if let Some(axis) = self.orientation.axis() {
            cells.push(self.anchor.step(axis));
        }
        cells
    }

    /// The block after one tumble in `dir`. Pure; no rule checks.
    pub fn rolled(&self, dir: Direction) -> Self {
        let r = ROLLS[orientation_index(self.orientation)][direction_index(dir)];
        Self {
            orientation: r.to,
            anchor: self.anchor.offset(r.d_col, r.d_row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Axis;

    #[test]
    fn upright_tumbles_two_cells_and_lies_down() {
        let b = Block::upright(Pos::new(5, 5));

        let e = b.rolled(Direction::East);
        assert_eq!(e.orientation, LyingX);
        assert_eq!(e.footprint().as_slice(), &[Pos::new(6, 5), Pos::new(7, 5)]);

        let w = b.rolled(Direction::West);
        assert_eq!(w.orientation, LyingX);
        assert_eq!(w.footprint().as_slice(), &[Pos::new(3, 5), Pos::new(4, 5)]);

        let n = b.rolled(Direction::North);
        assert_eq!(n.orientation, LyingZ);
        assert_eq!(n.footprint().as_slice(), &[Pos::new(5, 3), Pos::new(5, 4)]);

        let s = b.rolled(Direction::South);
        assert_eq!(s.orientation, LyingZ);
        assert_eq!(s.footprint().as_slice(), &[Pos::new(5, 6), Pos::new(5, 7)]);
    }

    #[test]
    fn lying_along_axis_stands_up_past_far_cell() {
        let x = Block::lying(LyingX, Pos::new(3, 3));
        assert_eq!(x.rolled(Direction::East), Block::upright(Pos::new(5, 3)));
        assert_eq!(x.rolled(Direction::West), Block::upright(Pos::new(2, 3)));

        let z = Block::lying(LyingZ, Pos::new(3, 3));
        assert_eq!(z.rolled(Direction::South), Block::upright(Pos::new(3, 5)));
        assert_eq!(z.rolled(Direction::North), Block::upright(Pos::new(3, 2)));
    }

    #[test]
    fn lying_across_axis_slides_one_cell() {
        let x = Block::lying(LyingX, Pos::new(3, 3));
        assert_eq!(x.rolled(Direction::North), Block::lying(LyingX, Pos::new(3, 2)));
        assert_eq!(x.rolled(Direction::South), Block::lying(LyingX, Pos::new(3, 4)));

        let z = Block::lying(LyingZ, Pos::new(3, 3));
        assert_eq!(z.rolled(Direction::East), Block::lying(LyingZ, Pos::new(4, 3)));
        assert_eq!(z.rolled(Direction::West), Block::lying(LyingZ, Pos::new(2, 3)));
    }

    #[test]
    fn opposite_rolls_cancel() {
        let starts = [
            Block::upright(Pos::new(4, 4)),
            Block::lying(LyingX, Pos::new(4, 4)),
            Block::lying(LyingZ, Pos::new(4, 4)),
        ];
        for start in starts {
            for dir in Direction::ALL {
                assert_eq!(
                    start.rolled(dir).rolled(dir.opposite()),
                    start,
                    "{:?} then {:?}",
                    start,
                    dir
                );
            }
        }
    }

    #[test]
    fn footprint_cells_are_adjacent_along_axis() {
        for (o, axis) in [(LyingX, Axis::X), (LyingZ, Axis::Z)] {
            let cells = Block::lying(o, Pos::new(1, 1)).footprint();
            assert_eq!(cells.len(), 2);
            assert_eq!(cells[1], cells[0].step(axis));
        }
        assert_eq!(Block::upright(Pos::new(1, 1)).footprint().len(), 1);
    }
}
