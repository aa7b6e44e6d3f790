//! BoardView: draws a `core::Board` into a screen buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout for a 2x2 board with 4x1 boxes:
//!
//! ```text
//! /----+----\
//! | 2  |    |
//! |----+----|
//! |    | 4  |
//! \----+----/
//! ```

use crate::core::Board;
use crate::fb::{CellStyle, ScreenBuffer};
use crate::palette::tile_style;
use crate::types::{BoxSize, GridSize, Tile};

/// Renders boards with ASCII box borders and coloured tile numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardView {
    border: CellStyle,
}

impl BoardView {
    /// A view drawing every border glyph in `border`.
    pub fn new(border: CellStyle) -> Self {
        Self { border }
    }

    /// Draw `board` with its top-left corner at `offset` in `screen`.
    ///
    /// Anything falling outside the screen is clipped.
    pub fn render<R>(&self, board: &Board<R>, screen: &mut ScreenBuffer, offset: (i32, i32)) {
        let size = board.size();
        let boxes = board.box_size();
        let (ox, oy) = offset;
        let row_pitch = boxes.height as i32 + 1;
        let inner_rows = size.height as i32 * row_pitch;

        let filler = edge_line(size, boxes, '|', ' ', '|', '|');
        let joiner = edge_line(size, boxes, '|', '-', '+', '|');

        screen.render_text(&edge_line(size, boxes, '/', '-', '+', '\\'), (ox, oy), self.border);
        for y in 0..inner_rows {
            screen.render_text(&filler, (ox, oy + y + 1), self.border);
            if y > 0 && y % row_pitch == 0 {
                screen.render_text(&joiner, (ox, oy + y), self.border);
            }
        }
        screen.render_text(
            &edge_line(size, boxes, '\\', '-', '+', '/'),
            (ox, oy + inner_rows),
            self.border,
        );

        for (x, y, value) in board.tiles() {
            let (tx, ty) = tile_text_position(boxes, x, y, value);
            screen.render_text(&value.to_string(), (ox + tx, oy + ty), tile_style(value));
        }
    }
}

/// Screen cells covered by a rendered board, borders included.
pub fn frame_size(size: GridSize, boxes: BoxSize) -> (u16, u16) {
    (
        size.width
            .saturating_mul(boxes.width.saturating_add(1))
            .saturating_add(1),
        size.height
            .saturating_mul(boxes.height.saturating_add(1))
            .saturating_add(1),
    )
}

/// Where the first digit of `value` lands for the tile at grid `(x, y)`,
/// relative to the board's top-left corner.
///
/// The row is the middle line of the box and the digits are centred across
/// the box width (they may start left of the box if they do not fit).
pub fn tile_text_position(boxes: BoxSize, x: u16, y: u16, value: Tile) -> (i32, i32) {
    let box_w = boxes.width as i32;
    let box_h = boxes.height as i32;
    let digits = value.to_string().len() as i32;

    let centre_y = ceil_half(box_h) + (box_h + 1) * y as i32;
    let left_x = 1 + (box_w + 1) * x as i32;
    (left_x + ceil_half(box_w) - ceil_half(digits), centre_y)
}

fn ceil_half(n: i32) -> i32 {
    (n + 1) / 2
}

/// `left` + `width` boxes of `fill` separated by `sep` + `right`.
fn edge_line(
    size: GridSize,
    boxes: BoxSize,
    left: char,
    fill: char,
    sep: char,
    right: char,
) -> String {
    let segment: String = std::iter::repeat(fill).take(boxes.width as usize).collect();
    let mut line = String::with_capacity((size.width as usize) * (segment.len() + 1) + 1);
    line.push(left);
    for i in 0..size.width {
        if i > 0 {
            line.push(sep);
        }
        line.push_str(&segment);
    }
    line.push(right);
    line
}
