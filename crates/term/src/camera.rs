//! Camera state for the board view.
//!
//! Two modes: top view (board drawn north-up, never rotates) and tower
//! view, which can spin continuously. The spin is driven by elapsed wall
//! time, so it runs at the same speed whatever the frame rate. None of
//! this feeds back into puzzle state.

use crate::types::{CAMERA_DEG_PER_SEC, CAMERA_START_DEG, CAMERA_WRAP_DEG, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Tower,
    Top,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Tower => "TOWER",
            ViewMode::Top => "TOP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    mode: ViewMode,
    rotating: bool,
    angle_deg: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Tower,
            rotating: false,
            angle_deg: CAMERA_START_DEG,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    pub fn toggle_top_view(&mut self) {
        self.mode = match self.mode {
            ViewMode::Tower => ViewMode::Top,
            ViewMode::Top => ViewMode::Tower,
        };
    }

    /// Flip the spin flag. It only has an effect in tower view.
    pub fn toggle_rotation(&mut self) {
        self.rotating = !self.rotating;
    }

    /// Advance the spin by `elapsed_ms` of wall time.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if !self.rotating || self.mode == ViewMode::Top {
            return;
        }
        self.angle_deg += CAMERA_DEG_PER_SEC * (elapsed_ms as f32 / 1000.0);
        while self.angle_deg > CAMERA_WRAP_DEG {
            self.angle_deg -= CAMERA_WRAP_DEG;
        }
    }

    /// Clockwise quarter turns to draw the board with (0..=3).
    ///
    /// The start angle looks at the board north-up, same as top view.
    pub fn quarter_turns(&self) -> u8 {
        if self.mode == ViewMode::Top {
            return 0;
        }
        let turns = ((self.angle_deg - CAMERA_START_DEG) / 90.0).floor() as i32;
        turns.rem_euclid(4) as u8
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a grid cell to its on-screen cell after `turns` clockwise quarter turns.
pub fn rotate_cell(col: u8, row: u8, turns: u8) -> (u8, u8) {
    let last = GRID_SIZE - 1;
    match turns % 4 {
        0 => (col, row),
        1 => (last - row, col),
        2 => (last - col, last - row),
        _ => (row, last - col),
    }
}
