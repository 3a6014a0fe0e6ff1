//! One play session as the binary runs it.
//!
//! Owns the [`GameState`], the camera, the session log and the soundtrack,
//! and routes each [`GameAction`] to whichever of them it concerns. The
//! frame loop in `main.rs` only does terminal I/O around this.

use std::io::Write;

use crate::core::{GameSnapshot, GameState, LevelPack, MoveOutcome, SessionStatus};
use crate::session_log::{LogRecord, MoveRecord, SessionLog};
use crate::term::{Camera, Cue, FrameBuffer, GameView, Soundtrack, Viewport};
use crate::types::GameAction;

/// What the frame loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
    /// Last level cleared after `moves` counted moves
    Won { moves: u32 },
}

pub struct App<W: Write> {
    state: GameState,
    camera: Camera,
    snap: GameSnapshot,
    log: SessionLog<W>,
    soundtrack: Box<dyn Soundtrack>,
}

impl<W: Write> App<W> {
    pub fn new(pack: LevelPack, log: SessionLog<W>, soundtrack: Box<dyn Soundtrack>) -> Self {
        let state = GameState::new(pack);
        let mut app = Self {
            snap: state.snapshot(),
            state,
            camera: Camera::new(),
            log,
            soundtrack,
        };
        app.log.record(&LogRecord::session_start(&app.state));
        app
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn log(&self) -> &SessionLog<W> {
        &self.log
    }

    pub fn handle_action(&mut self, action: GameAction) -> Flow {
        match action {
            GameAction::Quit => return Flow::Quit,
            GameAction::ToggleTopView => self.camera.toggle_top_view(),
            GameAction::ToggleRotation => self.camera.toggle_rotation(),
            GameAction::Restart => {
                if self.state.is_game_over() {
                    return Flow::Continue;
                }
                self.state.apply_action(action);
                self.log.record(&LogRecord::Restart {
                    episode_id: self.state.episode_id(),
                });
            }
            GameAction::Move(dir) => {
                let Some(outcome) = self.state.apply_action(action) else {
                    return Flow::Continue;
                };
                self.log
                    .record(&LogRecord::Move(MoveRecord::after(&self.state, dir, outcome)));
                self.cue_for(outcome);

                if self.state.is_game_over() {
                    let moves = self.state.session().moves_total();
                    self.log.record(&LogRecord::GameWon {
                        episode_id: self.state.episode_id(),
                        moves,
                    });
                    self.log.flush();
                    return Flow::Won { moves };
                }
            }
        }
        Flow::Continue
    }

    /// Advance the camera, render one frame and give the soundtrack its tick.
    pub fn frame(&mut self, elapsed_ms: u32, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        self.camera.advance(elapsed_ms);
        self.state.snapshot_into(&mut self.snap);
        view.render_into(&self.snap, &self.camera, viewport, fb);
        self.soundtrack.play_frame();
    }

    pub fn finish(&mut self) {
        self.log.flush();
    }

    fn cue_for(&mut self, outcome: MoveOutcome) {
        let cue = match (outcome, self.state.status()) {
            (MoveOutcome::Reset(_), _) => Cue::Reset,
            (MoveOutcome::GoalReached, SessionStatus::GameWon) => Cue::GameWon,
            (MoveOutcome::GoalReached, _) => Cue::LevelCleared,
            _ => return,
        };
        self.soundtrack.cue(cue);
    }
}
