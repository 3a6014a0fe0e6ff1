//! Move resolver - the puzzle state machine
//!
//! [`resolve_move`] takes the current [`PuzzleState`] and a direction and
//! returns the next state plus what happened. It never touches score or
//! level progression; that is the controller's job.
//!
//! Checks run against the *new* footprint, in priority order:
//!
//! 1. any cell `Void` → reset (fell off)
//! 2. any cell `Fragile` → reset (tile broke)
//! 3. any cell `Bridge` while the switch is OFF → reset (bridge retracted)
//! 4. footprint equals the trigger pair → flip the switch
//! 5. upright on `Goal` → level solved
//! 6. otherwise an ordinary move
//!
//! A lying block may rest across the goal cell; only an upright block drops
//! into it.

use crate::block::Block;
use crate::bridge::BridgeSwitch;
use crate::level::Level;
use crate::types::{CellKind, Direction};

/// Why the block was sent back to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetCause {
    Fell,
    Fragile,
    BridgeRetracted,
}

impl ResetCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetCause::Fell => "fell",
            ResetCause::Fragile => "fragile",
            ResetCause::BridgeRetracted => "bridge_retracted",
        }
    }
}

/// What a single roll did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Ordinary move onto safe tiles
    Moved,
    /// Landed on the trigger pair; `on` is the new switch state
    BridgeToggled { on: bool },
    /// Gameplay reset: block back at spawn, switch OFF
    Reset(ResetCause),
    /// Standing upright on the goal
    GoalReached,
}

impl MoveOutcome {
    /// Every outcome except a reset counts as a move for scoring.
    pub fn scores(&self) -> bool {
        !matches!(self, MoveOutcome::Reset(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOutcome::Moved => "moved",
            MoveOutcome::BridgeToggled { .. } => "bridge_toggled",
            MoveOutcome::Reset(cause) => cause.as_str(),
            MoveOutcome::GoalReached => "goal_reached",
        }
    }
}

/// Everything the rules mutate within one level attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    pub block: Block,
    pub bridge: BridgeSwitch,
}

impl PuzzleState {
    /// Upright on the level's spawn cell with the bridge retracted
    pub fn spawn(level: &Level) -> Self {
        Self {
            block: Block::upright(level.spawn()),
            bridge: BridgeSwitch::new(),
        }
    }
}

/// Resolve one roll. Pure: the input state is not modified.
pub fn resolve_move(level: &Level, state: PuzzleState, dir: Direction) -> (PuzzleState, MoveOutcome) {
    let block = state.block.rolled(dir);
    let cells = block.footprint();

    let mut fell = false;
    let mut fragile = false;
    let mut retracted = false;
    for &pos in &cells {
        match level.classify(pos) {
            CellKind::Void => fell = true,
            CellKind::Fragile => fragile = true,
            CellKind::Bridge if !state.bridge.is_on() => retracted = true,
            _ => {}
        }
    }

    let cause = if fell {
        Some(ResetCause::Fell)
    } else if fragile {
        Some(ResetCause::Fragile)
    } else if retracted {
        Some(ResetCause::BridgeRetracted)
    } else {
        None
    };
    if let Some(cause) = cause {
        return (PuzzleState::spawn(level), MoveOutcome::Reset(cause));
    }

    let mut bridge = state.bridge;
    let outcome = if bridge.toggle_if_triggered(&cells, level.trigger()) {
        MoveOutcome::BridgeToggled { on: bridge.is_on() }
    } else if block.is_upright() && level.classify(block.anchor) == CellKind::Goal {
        MoveOutcome::GoalReached
    } else {
        MoveOutcome::Moved
    };

    (PuzzleState { block, bridge }, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, Pos};

    // Spawn (1,1); trigger pair (3,1)-(4,1); bridge (5,1); fragile (1,4); goal (7,7).
    const ROWS: [&str; 10] = [
        "..........",
        ".##TTB##..",
        ".#.....#..",
        ".#.....#..",
        ".F.....#..",
        ".#.....#..",
        ".#.....#..",
        ".......G..",
        "..........",
        "..........",
    ];

    fn level() -> Level {
        Level::from_rows("test", Pos::new(1, 1), &ROWS).unwrap()
    }

    fn at(level: &Level, block: Block, bridge_on: bool) -> PuzzleState {
        let mut state = PuzzleState::spawn(level);
        state.block = block;
        if bridge_on {
            let pair = level.trigger().unwrap();
            state.bridge.toggle_if_triggered(&pair, level.trigger());
        }
        state
    }

    fn lying_x(col: i8, row: i8) -> Block {
        Block::lying(Orientation::LyingX, Pos::new(col, row))
    }

    fn lying_z(col: i8, row: i8) -> Block {
        Block::lying(Orientation::LyingZ, Pos::new(col, row))
    }

    #[test]
    fn ordinary_move_commits() {
        let level = level();
        let (next, outcome) = resolve_move(&level, PuzzleState::spawn(&level), Direction::South);
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(next.block, lying_z(1, 2));
        assert!(!next.bridge.is_on());
    }

    #[test]
    fn rolling_off_the_edge_resets_to_spawn() {
        let level = level();
        let (next, outcome) = resolve_move(&level, PuzzleState::spawn(&level), Direction::North);
        assert_eq!(outcome, MoveOutcome::Reset(ResetCause::Fell));
        assert_eq!(next, PuzzleState::spawn(&level));
    }

    #[test]
    fn off_grid_coordinates_resolve_to_void() {
        let level = level();
        let (_, outcome) = resolve_move(&level, PuzzleState::spawn(&level), Direction::West);
        assert_eq!(outcome, MoveOutcome::Reset(ResetCause::Fell));

        let corner = at(&level, Block::upright(Pos::new(0, 0)), false);
        let (_, outcome) = resolve_move(&level, corner, Direction::North);
        assert_eq!(outcome, MoveOutcome::Reset(ResetCause::Fell));
    }

    #[test]
    fn fragile_under_either_cell_resets() {
        let level = level();
        let upright = at(&level, Block::upright(Pos::new(1, 2)), false);
        let (next, outcome) = resolve_move(&level, upright, Direction::South);
        assert_eq!(outcome, MoveOutcome::Reset(ResetCause::Fragile));
        assert_eq!(next.block, Block::upright(level.spawn()));

        let lying = at(&level, lying_z(1, 2), false);
        let (_, outcome) = resolve_move(&level, lying, Direction::South);
        assert_eq!(outcome, MoveOutcome::Reset(ResetCause::Fragile));
    }

    #[test]
    fn void_takes_priority_over_fragile() {
        let level = level();
        // Slides onto (0,4)-(1,4): void next to fragile.
        let state = at(&level, lying_x(0, 3), false);
        let (_, outcome) = resolve_move(&level, state, Direction::South);
        assert_eq!(outcome, MoveOutcome::Reset(ResetCause::Fell));
    }

    #[test]
    fn trigger_pair_toggles_then_bridge_holds() {
        let level = level();
        let state = at(&level, Block::upright(Pos::new(2, 1)), false);
        let (next, outcome) = resolve_move(&level, state, Direction::East);
        assert_eq!(outcome, MoveOutcome::BridgeToggled { on: true });
        assert_eq!(next.block, lying_x(3, 1));
        assert!(next.bridge.is_on());

        let (after, outcome) = resolve_move(&level, next, Direction::East);
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(after.block, Block::upright(Pos::new(5, 1)));
        assert!(after.bridge.is_on());
    }

    #[test]
    fn single_trigger_cell_does_not_toggle() {
        let level = level();
        let (next, outcome) = resolve_move(&level, PuzzleState::spawn(&level), Direction::East);
        assert_eq!(next.block, lying_x(2, 1));
        assert_eq!(outcome, MoveOutcome::Moved);

        let state = at(&level, lying_x(1, 1), false);
        let (next, outcome) = resolve_move(&level, state, Direction::East);
        assert_eq!(next.block, Block::upright(Pos::new(3, 1)));
        assert_eq!(outcome, MoveOutcome::Moved);
        assert!(!next.bridge.is_on());
    }

    #[test]
    fn retracted_bridge_resets() {
        let level = level();
        let state = at(&level, lying_x(3, 1), false);
        let (next, outcome) = resolve_move(&level, state, Direction::East);
        assert_eq!(outcome, MoveOutcome::Reset(ResetCause::BridgeRetracted));
        assert_eq!(next, PuzzleState::spawn(&level));
    }

    #[test]
    fn reset_turns_the_bridge_off() {
        let level = level();
        let state = at(&level, Block::upright(Pos::new(6, 1)), true);
        assert!(state.bridge.is_on());
        let (next, outcome) = resolve_move(&level, state, Direction::North);
        assert_eq!(outcome, MoveOutcome::Reset(ResetCause::Fell));
        assert!(!next.bridge.is_on());
    }

    #[test]
    fn upright_on_goal_wins() {
        let level = level();
        let state = at(&level, lying_z(7, 5), false);
        let (next, outcome) = resolve_move(&level, state, Direction::South);
        assert_eq!(outcome, MoveOutcome::GoalReached);
        assert_eq!(next.block, Block::upright(level.goal()));
    }

    #[test]
    fn lying_across_goal_is_safe_but_not_a_win() {
        let level = level();
        let state = at(&level, Block::upright(Pos::new(7, 5)), false);
        let (next, outcome) = resolve_move(&level, state, Direction::South);
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(next.block, lying_z(7, 6));
    }

    #[test]
    fn input_state_is_untouched() {
        let level = level();
        let before = PuzzleState::spawn(&level);
        let copy = before;
        let _ = resolve_move(&level, before, Direction::South);
        assert_eq!(before, copy);
    }

    #[test]
    fn outcome_scoring() {
        assert!(MoveOutcome::Moved.scores());
        assert!(MoveOutcome::BridgeToggled { on: false }.scores());
        assert!(MoveOutcome::GoalReached.scores());
        assert!(!MoveOutcome::Reset(ResetCause::Fragile).scores());
    }
}
