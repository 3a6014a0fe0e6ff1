//! Seven-segment digits for the LEVEL and SCORE panels.
//!
//! Each digit is a 3x5 glyph:
//!
//! ```text
//!  ━      Top
//! ┃ ┃     UpperLeft  UpperRight
//!  ━      Middle
//! ┃ ┃     LowerLeft  LowerRight
//!  ━      Bottom
//! ```

use crate::fb::{CellStyle, FrameBuffer};

/// Glyph width in terminal columns
pub const DIGIT_W: u16 = 3;
/// Glyph height in terminal rows
pub const DIGIT_H: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Top,
    UpperLeft,
    UpperRight,
    Middle,
    LowerLeft,
    LowerRight,
    Bottom,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::Top,
        Segment::UpperLeft,
        Segment::UpperRight,
        Segment::Middle,
        Segment::LowerLeft,
        Segment::LowerRight,
        Segment::Bottom,
    ];

    /// Digits (0-9) that light this segment
    fn digits(&self) -> &'static [u8] {
        match self {
            Segment::Top => &[0, 2, 3, 5, 6, 7, 8, 9],
            Segment::UpperLeft => &[0, 4, 5, 6, 8, 9],
            Segment::UpperRight => &[0, 1, 2, 3, 4, 7, 8, 9],
            Segment::Middle => &[2, 3, 4, 5, 6, 8, 9],
            Segment::LowerLeft => &[0, 2, 6, 8],
            Segment::LowerRight => &[0, 1, 3, 4, 5, 6, 7, 8, 9],
            Segment::Bottom => &[0, 2, 3, 5, 6, 8, 9],
        }
    }

    /// Glyph-relative cell and character
    fn cell(&self) -> (u16, u16, char) {
        match self {
            Segment::Top => (1, 0, '━'),
            Segment::UpperLeft => (0, 1, '┃'),
            Segment::UpperRight => (2, 1, '┃'),
            Segment::Middle => (1, 2, '━'),
            Segment::LowerLeft => (0, 3, '┃'),
            Segment::LowerRight => (2, 3, '┃'),
            Segment::Bottom => (1, 4, '━'),
        }
    }

    /// Whether `digit` lights this segment. Digits above 9 use their last digit.
    pub fn is_lit(&self, digit: u8) -> bool {
        self.digits().contains(&(digit % 10))
    }
}

/// Lit flags for `digit`, in [`Segment::ALL`] order
pub fn lit_segments(digit: u8) -> [bool; 7] {
    Segment::ALL.map(|s| s.is_lit(digit))
}

/// Draw one digit with its top-left corner at `(x, y)`.
///
/// Unlit segments are drawn with `off` so the panel keeps its shape.
pub fn draw_digit(fb: &mut FrameBuffer, x: u16, y: u16, digit: u8, on: CellStyle, off: CellStyle) {
    for segment in Segment::ALL {
        let (dx, dy, ch) = segment.cell();
        let style = if segment.is_lit(digit) { on } else { off };
        fb.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
    }
}

/// Draw a `(ones, tens)` pair as two digits, tens on the left.
pub fn draw_pair(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    (ones, tens): (u8, u8),
    on: CellStyle,
    off: CellStyle,
) {
    draw_digit(fb, x, y, tens, on, off);
    draw_digit(fb, x.saturating_add(DIGIT_W + 1), y, ones, on, off);
}
