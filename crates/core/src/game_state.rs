//! Game state - the aggregate one controller owns
//!
//! Bundles the level pack, the per-attempt [`PuzzleState`] and the
//! [`LevelSession`]. Input arrives as [`GameAction`]s; only `Move` and
//! `Restart` touch puzzle state, view toggles and `Quit` belong to the host.

use crate::level::{Level, LevelPack};
use crate::resolver::{resolve_move, MoveOutcome, PuzzleState};
use crate::session::{LevelSession, Progress, SessionStatus};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction};

#[derive(Debug, Clone)]
pub struct GameState {
    pack: LevelPack,
    puzzle: PuzzleState,
    session: LevelSession,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    move_id: u32,
    last_outcome: Option<MoveOutcome>,
}

impl GameState {
    /// Start on level 1 of `pack`, block upright on its spawn.
    pub fn new(pack: LevelPack) -> Self {
        let puzzle = PuzzleState::spawn(pack.first());
        let session = LevelSession::new(pack.len());
        Self {
            pack,
            puzzle,
            session,
            episode_id: 0,
            move_id: 0,
            last_outcome: None,
        }
    }

    pub fn pack(&self) -> &LevelPack {
        &self.pack
    }

    /// The level being played
    pub fn current_level(&self) -> &Level {
        self.pack
            .get(self.session.level())
            .unwrap_or_else(|| self.pack.first())
    }

    pub fn puzzle(&self) -> PuzzleState {
        self.puzzle
    }

    pub fn session(&self) -> &LevelSession {
        &self.session
    }

    pub fn level(&self) -> u8 {
        self.session.level()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn move_id(&self) -> u32 {
        self.move_id
    }

    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last_outcome
    }

    /// Apply one input. Returns the outcome when a roll was resolved.
    ///
    /// Once the game is won every action is ignored, `Restart` included.
    pub fn apply_action(&mut self, action: GameAction) -> Option<MoveOutcome> {
        if self.session.is_game_over() {
            return None;
        }
        match action {
            GameAction::Move(dir) => self.roll(dir),
            GameAction::Restart => {
                self.restart();
                None
            }
            GameAction::ToggleTopView | GameAction::ToggleRotation | GameAction::Quit => None,
        }
    }

    /// Roll the block once. `None` after the game is won.
    pub fn roll(&mut self, dir: Direction) -> Option<MoveOutcome> {
        if self.session.is_game_over() {
            return None;
        }

        let (next, outcome) = resolve_move(self.current_level(), self.puzzle, dir);
        self.puzzle = next;
        if let Progress::Advanced { .. } = self.session.on_move_outcome(outcome) {
            self.puzzle = PuzzleState::spawn(self.current_level());
        }

        self.move_id = self.move_id.wrapping_add(1);
        self.last_outcome = Some(outcome);
        Some(outcome)
    }

    /// Back to level 1 with a new episode id; the pack is kept.
    fn restart(&mut self) {
        let next_episode = self.episode_id.wrapping_add(1);
        self.session.restart();
        self.puzzle = PuzzleState::spawn(self.pack.first());
        self.episode_id = next_episode;
        self.move_id = 0;
        self.last_outcome = None;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.current_level().grid().write_rows(&mut out.tiles);
        out.level = self.session.level();
        out.level_count = self.session.level_count();
        out.block = self.puzzle.block;
        out.bridge_on = self.puzzle.bridge.is_on();
        out.score = self.session.score();
        out.score_digits = self.session.digits_for(self.session.level());
        out.status = self.session.status();
        out.episode_id = self.episode_id;
        out.move_id = self.move_id;
        out.last_outcome = self.last_outcome;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
