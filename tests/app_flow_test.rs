use std::cell::RefCell;
use std::rc::Rc;

use tui_block_roll::app::{App, Flow};
use tui_block_roll::config::GameConfig;
use tui_block_roll::core::LevelPack;
use tui_block_roll::session_log::SessionLog;
use tui_block_roll::term::{Cue, FrameBuffer, GameView, Silent, Soundtrack, Viewport};
use tui_block_roll::types::Direction::{self, East as E, South as S, West as W};
use tui_block_roll::types::GameAction;

const SOLUTION: [Direction; 20] = [
    E, E, S, S, S, S, S, S, // level 1
    E, E, S, S, E, S, S, E, S, E, E, S, // level 2
];

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Cue>>>);

impl Soundtrack for Recorder {
    fn cue(&mut self, cue: Cue) {
        self.0.borrow_mut().push(cue);
    }

    fn play_frame(&mut self) {}
}

fn log_lines(app: &App<Vec<u8>>) -> Vec<serde_json::Value> {
    let bytes = app.log().get_ref().unwrap();
    std::str::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn full_playthrough_logs_and_wins() {
    let pack = LevelPack::builtin().unwrap();
    let mut app = App::new(pack, SessionLog::new(Vec::new()), Box::new(Silent));

    let mut flow = Flow::Continue;
    for dir in SOLUTION {
        assert_eq!(flow, Flow::Continue);
        flow = app.handle_action(GameAction::Move(dir));
    }
    assert_eq!(flow, Flow::Won { moves: 20 });

    // Moves after the win are ignored.
    assert_eq!(app.handle_action(GameAction::Move(E)), Flow::Continue);

    let lines = log_lines(&app);
    assert_eq!(lines.len(), 1 + 20 + 1);
    assert_eq!(lines[0]["type"], "session_start");
    assert_eq!(lines[0]["levels"][1], "Crossing");
    assert_eq!(lines[3]["outcome"], "bridge_toggled");
    assert_eq!(lines[8]["outcome"], "goal_reached");
    assert_eq!(lines[8]["level"], 2);
    assert_eq!(lines[20]["score"], 20);
    assert_eq!(lines[21]["type"], "game_won");
    assert_eq!(lines[21]["moves"], 20);
}

#[test]
fn cues_follow_outcomes() {
    let recorder = Recorder::default();
    let cues = recorder.0.clone();
    let pack = LevelPack::builtin().unwrap();
    let mut app = App::new(pack, SessionLog::<Vec<u8>>::disabled(), Box::new(recorder));

    // Roll west off the board.
    app.handle_action(GameAction::Move(W));
    assert_eq!(cues.borrow().as_slice(), &[Cue::Reset]);

    for dir in SOLUTION {
        app.handle_action(GameAction::Move(dir));
    }
    assert_eq!(
        cues.borrow().as_slice(),
        &[Cue::Reset, Cue::LevelCleared, Cue::GameWon]
    );
}

#[test]
fn view_actions_only_touch_the_camera() {
    let pack = LevelPack::builtin().unwrap();
    let mut app = App::new(pack, SessionLog::new(Vec::new()), Box::new(Silent));

    assert_eq!(app.handle_action(GameAction::ToggleRotation), Flow::Continue);
    assert!(app.camera().is_rotating());
    app.handle_action(GameAction::ToggleTopView);
    assert_eq!(app.state().move_id(), 0);
    assert_eq!(log_lines(&app).len(), 1);

    assert_eq!(app.handle_action(GameAction::Quit), Flow::Quit);
}

#[test]
fn restart_is_logged_with_new_episode() {
    let pack = LevelPack::builtin().unwrap();
    let mut app = App::new(pack, SessionLog::new(Vec::new()), Box::new(Silent));
    app.handle_action(GameAction::Move(E));
    app.handle_action(GameAction::Restart);

    assert_eq!(app.state().score(), 0);
    let lines = log_lines(&app);
    assert_eq!(lines[2]["type"], "restart");
    assert_eq!(lines[2]["episode_id"], 1);
}

#[test]
fn restart_after_win_is_not_logged() {
    let pack = LevelPack::builtin().unwrap();
    let mut app = App::new(pack, SessionLog::new(Vec::new()), Box::new(Silent));
    for dir in SOLUTION {
        app.handle_action(GameAction::Move(dir));
    }
    let before = log_lines(&app).len();

    assert_eq!(app.handle_action(GameAction::Restart), Flow::Continue);
    assert!(app.state().is_game_over());
    assert_eq!(log_lines(&app).len(), before);
}

#[test]
fn frame_renders_current_state() {
    let pack = LevelPack::builtin().unwrap();
    let mut app = App::new(pack, SessionLog::<Vec<u8>>::disabled(), Box::new(Silent));
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    app.handle_action(GameAction::Move(E));
    app.frame(16, &view, Viewport::new(80, 24), &mut fb);
    assert!(fb.contains_text("LEVEL 1/2"));
    assert!(fb.contains_text("BRIDGE OFF"));
}

#[test]
fn config_loads_pack_from_json_file() {
    let spec = LevelPack::builtin().unwrap().to_spec();
    let path = std::env::temp_dir().join(format!("block-roll-pack-{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string(&spec).unwrap()).unwrap();

    let args = vec!["--levels".to_string(), path.display().to_string()];
    let config = GameConfig::from_lookup(|_| None).with_args(&args).unwrap();
    let pack = config.load_levels().unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(pack.len(), 2);
    assert_eq!(pack, LevelPack::builtin().unwrap());
}
