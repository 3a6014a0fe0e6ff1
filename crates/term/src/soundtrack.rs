//! Soundtrack hook, called once per frame.
//!
//! Playback is fire-and-forget: nothing here can fail the frame or feed
//! back into puzzle state. [`Silent`] does nothing; [`Bell`] rings the
//! terminal bell for queued cues.

use std::io::{self, Write};

/// Game moments worth a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Reset,
    LevelCleared,
    GameWon,
}

pub trait Soundtrack {
    /// Queue a cue; it plays on the next [`Soundtrack::play_frame`].
    fn cue(&mut self, _cue: Cue) {}

    /// Advance playback by one frame.
    fn play_frame(&mut self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Soundtrack for Silent {
    fn play_frame(&mut self) {}
}

/// Rings BEL (`\x07`) once per frame that has pending cues.
pub struct Bell<W: Write> {
    out: W,
    pending: bool,
    rung: u32,
}

impl Bell<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Bell<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: false,
            rung: 0,
        }
    }

    /// How many times the bell has rung
    pub fn rung(&self) -> u32 {
        self.rung
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Soundtrack for Bell<W> {
    fn cue(&mut self, _cue: Cue) {
        self.pending = true;
    }

    fn play_frame(&mut self) {
        if !std::mem::take(&mut self.pending) {
            return;
        }
        // A failed write just means no sound this time.
        if self.out.write_all(b"\x07").and_then(|_| self.out.flush()).is_ok() {
            self.rung += 1;
        }
    }
}

/// Silent or bell, picked at startup from config.
pub fn from_config(bell: bool) -> Box<dyn Soundtrack> {
    if bell {
        Box::new(Bell::stdout())
    } else {
        Box::new(Silent)
    }
}
