//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::camera::{rotate_cell, Camera};
use crate::core::{GameSnapshot, MoveOutcome, SessionStatus};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::seven_seg::{self, DIGIT_H};
use crate::types::{CellKind, Orientation, Pos, GRID_SIZE};

const BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(20, 20, 30);

/// Largest cell size in terminal cells, per side
const MAX_CELL: u16 = 16;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame landed for a given viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// Terminal renderer for the puzzle board and scoreboard.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL),
            cell_h: cell_h.clamp(1, MAX_CELL),
        }
    }

    /// Board frame position, centered in the viewport.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let frame_w = (GRID_SIZE as u16) * self.cell_w + 2;
        let frame_h = (GRID_SIZE as u16) * self.cell_h + 2;
        BoardLayout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Top-left terminal cell of grid cell `pos` drawn with `turns` quarter turns.
    pub fn cell_origin(&self, layout: BoardLayout, pos: Pos, turns: u8) -> Option<(u16, u16)> {
        if !pos.in_grid() {
            return None;
        }
        let (sx, sy) = rotate_cell(pos.col as u8, pos.row as u8, turns);
        Some((
            layout.x + 1 + sx as u16 * self.cell_w,
            layout.y + 1 + sy as u16 * self.cell_h,
        ))
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        camera: &Camera,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let turns = camera.quarter_turns();

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        fb.draw_box(
            layout.x,
            layout.y,
            layout.frame_w,
            layout.frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), BG),
        );

        for row in 0..GRID_SIZE as i8 {
            for col in 0..GRID_SIZE as i8 {
                let pos = Pos::new(col, row);
                let (ch, style) = tile_glyph(snap.tile(pos), snap.bridge_on);
                self.fill_cell(fb, layout, pos, turns, ch, style);
            }
        }

        let (ch, style) = block_glyph(snap.block.orientation);
        for pos in snap.footprint() {
            self.fill_cell(fb, layout, pos, turns, ch, style);
        }

        self.draw_side_panel(fb, snap, camera, viewport, layout);
        self.draw_help(fb, viewport, layout);

        match snap.status {
            SessionStatus::GameWon => self.draw_overlay_text(fb, layout, "YOU WIN"),
            SessionStatus::LevelCleared(n)
                if snap.last_outcome == Some(MoveOutcome::GoalReached) =>
            {
                let mut text = *b"LEVEL 0 CLEARED";
                text[6] = b'0' + n % 10;
                let text = std::str::from_utf8(&text).unwrap_or("LEVEL CLEARED");
                self.draw_overlay_text(fb, layout, text);
            }
            _ => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, camera: &Camera, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, camera, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        pos: Pos,
        turns: u8,
        ch: char,
        style: CellStyle,
    ) {
        if let Some((px, py)) = self.cell_origin(layout, pos, turns) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        camera: &Camera,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let seg_on = CellStyle::new(Rgb::new(255, 80, 60), BG).bold();
        let seg_off = CellStyle::new(Rgb::new(50, 30, 30), BG);

        let mut y = layout.y;
        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_u32(panel_x + 6, y, snap.level as u32, value);
        fb.put_char(panel_x + 7, y, '/', value);
        fb.put_u32(panel_x + 8, y, snap.level_count as u32, value);
        y = y.saturating_add(1);
        seven_seg::draw_pair(fb, panel_x, y, (snap.level % 10, 0), seg_on, seg_off);
        y = y.saturating_add(DIGIT_H + 1);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        seven_seg::draw_pair(fb, panel_x, y, snap.score_digits, seg_on, seg_off);
        y = y.saturating_add(DIGIT_H + 1);

        fb.put_str(panel_x, y, "BRIDGE", label);
        fb.put_str(
            panel_x + 7,
            y,
            if snap.bridge_on { "ON" } else { "OFF" },
            value,
        );
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "VIEW", label);
        fb.put_str(panel_x + 7, y, camera.mode().as_str(), value);
        if camera.is_rotating() {
            fb.put_str(panel_x + 13, y, "*", value.dim());
        }
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport, layout: BoardLayout) {
        let y = layout.y.saturating_add(layout.frame_h);
        if y >= viewport.height {
            return;
        }
        let style = CellStyle::new(Rgb::new(120, 120, 120), BG).dim();
        fb.put_str_centered(
            0,
            y,
            viewport.width,
            "wasd/hjkl/arrows roll  t view  space spin  r restart  q quit",
            style,
        );
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: BoardLayout, text: &str) {
        let mid_y = layout.y.saturating_add(layout.frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
        fb.put_str_centered(layout.x, mid_y, layout.frame_w, text, style);
    }
}

fn tile_glyph(kind: CellKind, bridge_on: bool) -> (char, CellStyle) {
    let solid = |r, g, b| ('█', CellStyle::new(Rgb::new(r, g, b), BOARD_BG));
    match kind {
        CellKind::Normal => solid(166, 42, 42),
        CellKind::Fragile => ('▒', CellStyle::new(Rgb::new(255, 230, 0), BOARD_BG)),
        CellKind::Bridge if bridge_on => solid(0, 255, 255),
        CellKind::BridgeTrigger => solid(0, 0, 230),
        CellKind::Goal => ('▓', CellStyle::new(Rgb::new(0, 255, 128), BOARD_BG).bold()),
        CellKind::Void | CellKind::Bridge => {
            ('·', CellStyle::new(Rgb::new(60, 60, 70), BOARD_BG).dim())
        }
    }
}

fn block_glyph(orientation: Orientation) -> (char, CellStyle) {
    match orientation {
        Orientation::Upright => ('█', CellStyle::new(Rgb::new(235, 235, 235), BOARD_BG).bold()),
        Orientation::LyingX | Orientation::LyingZ => {
            ('▓', CellStyle::new(Rgb::new(170, 170, 170), BOARD_BG))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, LevelPack};
    use crate::types::Direction;

    const VIEW: Viewport = Viewport {
        width: 80,
        height: 24,
    };

    fn game() -> GameState {
        GameState::new(LevelPack::builtin().unwrap())
    }

    fn char_at(view: &GameView, fb: &FrameBuffer, pos: Pos, turns: u8) -> char {
        let (x, y) = view.cell_origin(view.layout(VIEW), pos, turns).unwrap();
        fb.get(x, y).unwrap().ch
    }

    #[test]
    fn renders_board_and_panel() {
        let view = GameView::default();
        let fb = view.render(&game().snapshot(), &Camera::new(), VIEW);
        assert!(fb.contains_text("LEVEL 1/2"));
        assert!(fb.contains_text("SCORE"));
        assert!(fb.contains_text("BRIDGE OFF"));
        assert!(fb.contains_text("VIEW   TOWER"));
        assert!(fb.contains_text("q quit"));
    }

    #[test]
    fn block_sits_on_spawn() {
        let view = GameView::default();
        let fb = view.render(&game().snapshot(), &Camera::new(), VIEW);
        let (x, y) = view.cell_origin(view.layout(VIEW), Pos::new(0, 0), 0).unwrap();
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(235, 235, 235));
    }

    #[test]
    fn bridge_is_drawn_only_while_on() {
        let view = GameView::default();
        let mut state = game();
        let bridge = Pos::new(3, 4);

        let fb = view.render(&state.snapshot(), &Camera::new(), VIEW);
        assert_eq!(char_at(&view, &fb, bridge, 0), '·');

        for dir in [Direction::East, Direction::East, Direction::South] {
            state.roll(dir);
        }
        let fb = view.render(&state.snapshot(), &Camera::new(), VIEW);
        assert_eq!(char_at(&view, &fb, bridge, 0), '█');
        assert!(fb.contains_text("BRIDGE ON"));
    }

    #[test]
    fn rotated_camera_moves_tiles() {
        let view = GameView::default();
        let snap = game().snapshot();
        let mut cam = Camera::new();
        cam.toggle_rotation();
        cam.advance(1000);
        assert_eq!(cam.quarter_turns(), 1);

        let fb = view.render(&snap, &cam, VIEW);
        assert_eq!(char_at(&view, &fb, Pos::new(3, 9), 1), '▓');
        let (x, y) = view.cell_origin(view.layout(VIEW), Pos::new(3, 9), 0).unwrap();
        assert_ne!(fb.get(x, y).unwrap().ch, '▓');
        assert!(fb.contains_text("*"));
    }

    #[test]
    fn level_clear_banner_then_win_banner() {
        use crate::types::Direction::{East as E, South as S};
        let view = GameView::default();
        let mut state = game();
        for dir in [E, E, S, S, S, S, S, S] {
            state.roll(dir);
        }
        let fb = view.render(&state.snapshot(), &Camera::new(), VIEW);
        assert!(fb.contains_text("LEVEL 1 CLEARED"));
        assert!(fb.contains_text("LEVEL 2/2"));

        state.roll(E);
        let fb = view.render(&state.snapshot(), &Camera::new(), VIEW);
        assert!(!fb.contains_text("CLEARED"));

        state.roll(Direction::West);
        for dir in [E, E, S, S, E, S, S, E, S, E, E] {
            state.roll(dir);
        }
        assert!(!state.is_game_over());
        state.roll(S);
        let fb = view.render(&state.snapshot(), &Camera::new(), VIEW);
        assert!(fb.contains_text("YOU WIN"));
    }

    #[test]
    fn oversized_cells_are_clamped() {
        let view = GameView::new(u16::MAX, 0);
        let layout = view.layout(Viewport::new(u16::MAX, u16::MAX));
        assert_eq!(layout.frame_w, 10 * MAX_CELL + 2);
        assert_eq!(layout.frame_h, 10 + 2);
        assert!(view.cell_origin(layout, Pos::new(9, 9), 0).is_some());

        let fb = view.render(&game().snapshot(), &Camera::new(), Viewport::new(40, 12));
        assert_eq!((fb.width(), fb.height()), (40, 12));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&game().snapshot(), &Camera::new(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
