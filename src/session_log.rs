//! Optional JSON-lines session log.
//!
//! One JSON object per line, tagged by `"type"`:
//!
//! ```json
//! {"type":"session_start","episode_id":0,"levels":["First Steps","Crossing"]}
//! {"type":"move","episode_id":0,"level":1,"direction":"east","outcome":"moved","score":1,"bridge_on":false,"block":{"orientation":"lying_x","col":1,"row":0}}
//! {"type":"game_won","episode_id":0,"moves":20}
//! ```
//!
//! Logging must never stop play: the first write error disables the log.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::{GameState, MoveOutcome};
use crate::types::Direction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockRecord {
    pub orientation: &'static str,
    pub col: i8,
    pub row: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub episode_id: u32,
    pub level: u8,
    pub direction: &'static str,
    pub outcome: &'static str,
    pub score: u32,
    pub bridge_on: bool,
    pub block: BlockRecord,
}

impl MoveRecord {
    /// Describe a roll that was just applied to `state`.
    pub fn after(state: &GameState, dir: Direction, outcome: MoveOutcome) -> Self {
        let puzzle = state.puzzle();
        Self {
            episode_id: state.episode_id(),
            level: state.level(),
            direction: dir.as_str(),
            outcome: outcome.as_str(),
            score: state.score(),
            bridge_on: puzzle.bridge.is_on(),
            block: BlockRecord {
                orientation: puzzle.block.orientation.as_str(),
                col: puzzle.block.anchor.col,
                row: puzzle.block.anchor.row,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart { episode_id: u32, levels: Vec<String> },
    Move(MoveRecord),
    Restart { episode_id: u32 },
    GameWon { episode_id: u32, moves: u32 },
}

impl LogRecord {
    pub fn session_start(state: &GameState) -> Self {
        LogRecord::SessionStart {
            episode_id: state.episode_id(),
            levels: state.pack().iter().map(|l| l.name().to_string()).collect(),
        }
    }
}

pub struct SessionLog<W: Write> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl SessionLog<BufWriter<File>> {
    /// Append to `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SessionLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Write one record as a line. Returns whether it was written.
    pub fn record(&mut self, record: &LogRecord) -> bool {
        let Some(out) = self.out.as_mut() else {
            return false;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return false;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
            return false;
        }
        true
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }

    pub fn get_ref(&self) -> Option<&W> {
        self.out.as_ref()
    }
}
