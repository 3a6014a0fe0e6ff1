//! Level/score controller
//!
//! Keeps one score per level, the active level number, and the session
//! status. It only reacts to [`MoveOutcome`]s; the block and bridge are
//! handled by [`crate::game_state::GameState`].
//!
//! Scoring rules:
//!
//! - every non-reset outcome is one move (+1), including the winning move
//! - a reset puts the active level's score back to its base: `0` on level 1,
//!   the previous level's final score afterwards
//! - clearing level `n` carries its score into level `n + 1`
//! - clearing the last level ends the session (`GameWon`)

use crate::resolver::MoveOutcome;
use crate::types::MAX_LEVELS;

/// Where the session is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    /// Still on level 1
    #[default]
    Playing,
    /// Level `n` was cleared; its successor is being played
    LevelCleared(u8),
    /// Last level cleared. Terminal.
    GameWon,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Playing => "playing",
            SessionStatus::LevelCleared(_) => "level_cleared",
            SessionStatus::GameWon => "game_won",
        }
    }
}

/// What the controller did with an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Same level, keep playing
    Continue,
    /// Moved on to level `to`; the block must respawn there
    Advanced { to: u8 },
    /// Last level cleared
    Won,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSession {
    /// 1-based
    level: u8,
    level_count: u8,
    /// `scores[n - 1]` is level `n`'s score
    scores: [u32; MAX_LEVELS],
    status: SessionStatus,
}

impl LevelSession {
    /// A fresh session over `level_count` levels (clamped to `1..=MAX_LEVELS`).
    pub fn new(level_count: usize) -> Self {
        Self {
            level: 1,
            level_count: level_count.clamp(1, MAX_LEVELS) as u8,
            scores: [0; MAX_LEVELS],
            status: SessionStatus::Playing,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn level_count(&self) -> u8 {
        self.level_count
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == SessionStatus::GameWon
    }

    /// Active level's score
    pub fn score(&self) -> u32 {
        self.scores[self.index()]
    }

    /// Total moves counted so far; what the host prints on a win
    pub fn moves_total(&self) -> u32 {
        self.score()
    }

    /// Score of level `level` if it has been reached
    pub fn score_for(&self, level: u8) -> Option<u32> {
        if level == 0 || level > self.level {
            return None;
        }
        Some(self.scores[level as usize - 1])
    }

    /// Score a reset on the active level falls back to
    pub fn base(&self) -> u32 {
        match self.level {
            0 | 1 => 0,
            n => self.scores[n as usize - 2],
        }
    }

    /// `(ones, tens)` of `level`'s score, for the seven-segment display.
    ///
    /// Levels not reached yet read as `(0, 0)`. Scores past 99 wrap on the
    /// tens digit.
    pub fn digits_for(&self, level: u8) -> (u8, u8) {
        let score = self.score_for(level).unwrap_or(0);
        ((score % 10) as u8, ((score / 10) % 10) as u8)
    }

    /// Apply one resolved move. Ignored once the game is won.
    pub fn on_move_outcome(&mut self, outcome: MoveOutcome) -> Progress {
        if self.is_game_over() {
            return Progress::Continue;
        }

        let i = self.index();
        if !outcome.scores() {
            self.scores[i] = self.base();
            return Progress::Continue;
        }

        self.scores[i] = self.scores[i].saturating_add(1);
        if outcome != MoveOutcome::GoalReached {
            return Progress::Continue;
        }

        if self.level < self.level_count {
            let cleared = self.level;
            self.scores[i + 1] = self.scores[i];
            self.level += 1;
            self.status = SessionStatus::LevelCleared(cleared);
            Progress::Advanced { to: self.level }
        } else {
            self.status = SessionStatus::GameWon;
            Progress::Won
        }
    }

    /// Back to level 1 with a zero score
    pub fn restart(&mut self) {
        *self = Self::new(self.level_count as usize);
    }

    fn index(&self) -> usize {
        self.level as usize - 1
    }
}

impl Default for LevelSession {
    fn default() -> Self {
        Self::new(2)
    }
}
