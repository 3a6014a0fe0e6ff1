//! Terminal block-roll runner (default binary).
//!
//! Loads and validates the level pack before touching the terminal, then
//! runs a fixed-interval frame loop: render, play a sound frame, wait for
//! at most one input event.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_block_roll::app::{App, Flow};
use tui_block_roll::config::GameConfig;
use tui_block_roll::core::LevelPack;
use tui_block_roll::input::action_for_event;
use tui_block_roll::session_log::SessionLog;
use tui_block_roll::term::{soundtrack, FrameBuffer, GameView, TerminalRenderer, Viewport};

/// How long the final frame stays up before the win message
const WIN_HOLD: Duration = Duration::from_millis(1500);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = GameConfig::from_env().with_args(&args)?;

    let pack = config.load_levels().inspect_err(|e| {
        eprintln!("[Levels] {}", e);
    })?;

    if config.check_only {
        print_summary(&config, &pack);
        return Ok(());
    }

    let log = match &config.log_path {
        Some(path) => SessionLog::open(path).unwrap_or_else(|e| {
            eprintln!("[Log] cannot open {}: {} (session log disabled)", path, e);
            SessionLog::disabled()
        }),
        None => SessionLog::disabled(),
    };
    let mut app = App::new(pack, log, soundtrack::from_config(config.bell));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    app.finish();

    if let Flow::Won { moves } = result? {
        println!("You win! You took {} moves to finish the game.", moves);
    }
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    app: &mut App<BufWriter<File>>,
    config: &GameConfig,
) -> Result<Flow> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = config.tick();
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_millis().min(u32::MAX as u128) as u32;
        last_frame = now;

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.frame(elapsed_ms, &view, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = tick
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);
        if !event::poll(timeout)? {
            continue;
        }

        let ev = event::read()?;
        if let Event::Resize(..) = ev {
            term.invalidate();
        }
        let Some(action) = action_for_event(&ev) else {
            continue;
        };

        match app.handle_action(action) {
            Flow::Continue => {}
            Flow::Quit => return Ok(Flow::Quit),
            won @ Flow::Won { .. } => {
                app.frame(0, &view, Viewport::new(w, h), &mut fb);
                term.draw_swap(&mut fb)?;
                if event::poll(WIN_HOLD)? {
                    let _ = event::read()?;
                }
                return Ok(won);
            }
        }
    }
}

fn print_summary(config: &GameConfig, pack: &LevelPack) {
    let source = config.levels_path.as_deref().unwrap_or("built-in");
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{}: {} level(s) OK", source, pack.len());
    for (i, level) in pack.iter().enumerate() {
        let spawn = level.spawn();
        let goal = level.goal();
        let _ = writeln!(
            out,
            "  {}. {} spawn ({},{}) goal ({},{}) bridge {}",
            i + 1,
            level.name(),
            spawn.col,
            spawn.row,
            goal.col,
            goal.row,
            if level.trigger().is_some() { "yes" } else { "no" },
        );
    }
}
