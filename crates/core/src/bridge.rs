//! Bridge switch - one boolean per level attempt

use crate::types::Pos;

/// Whether the level's bridge cells are extended (walkable).
///
/// Starts OFF and goes back to OFF whenever the block respawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BridgeSwitch {
    on: bool,
}

impl BridgeSwitch {
    pub fn new() -> Self {
        Self { on: false }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Flip the switch if `footprint` covers exactly the trigger pair.
    ///
    /// Returns whether the switch changed. An upright block never matches
    /// since it only covers one cell.
    pub fn toggle_if_triggered(&mut self, footprint: &[Pos], trigger: Option<[Pos; 2]>) -> bool {
        let Some([a, b]) = trigger else {
            return false;
        };
        let hit = match footprint {
            [x, y] => (*x == a && *y == b) || (*x == b && *y == a),
            _ => false,
        };
        if hit {
            self.on = !self.on;
        }
        hit
    }

    pub fn reset(&mut self) {
        self.on = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIR: Option<[Pos; 2]> = Some([Pos::new(3, 1), Pos::new(3, 2)]);

    #[test]
    fn toggles_on_exact_pair_in_either_order() {
        let mut sw = BridgeSwitch::new();
        assert!(sw.toggle_if_triggered(&[Pos::new(3, 1), Pos::new(3, 2)], PAIR));
        assert!(sw.is_on());
        assert!(sw.toggle_if_triggered(&[Pos::new(3, 2), Pos::new(3, 1)], PAIR));
        assert!(!sw.is_on());
    }

    #[test]
    fn ignores_partial_or_single_cell_cover() {
        let mut sw = BridgeSwitch::new();
        assert!(!sw.toggle_if_triggered(&[Pos::new(3, 1)], PAIR));
        assert!(!sw.toggle_if_triggered(&[Pos::new(3, 0), Pos::new(3, 1)], PAIR));
        assert!(!sw.toggle_if_triggered(&[Pos::new(3, 1), Pos::new(3, 2)], None));
        assert!(!sw.is_on());
    }

    #[test]
    fn reset_turns_off() {
        let mut sw = BridgeSwitch::new();
        sw.toggle_if_triggered(&[Pos::new(3, 1), Pos::new(3, 2)], PAIR);
        sw.reset();
        assert_eq!(sw, BridgeSwitch::default());
    }
}
