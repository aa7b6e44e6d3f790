//! Screen buffer and style types for terminal rendering.
//!
//! A [`ScreenBuffer`] is a fixed-size grid of styled characters. Text is
//! composited into it at arbitrary positions (clipped at the edges), then the
//! whole buffer is flushed once per frame into styled output lines.

use crate::core::error::{ensure_positive, Result};
use crate::renderer::encode_cell_into;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
///
/// `None` colours leave the terminal's own default in place, so
/// `CellStyle::default()` renders exactly like unstyled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Option<Rgb>, bg: Option<Rgb>, bold: bool) -> Self {
        Self { fg, bg, bold }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn plain(ch: char) -> Self {
        Self {
            ch,
            style: CellStyle::new(None, None, false),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::plain(' ')
    }
}

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

/// 2D buffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    /// Where this buffer's origin lands in the output frame.
    offset: (i32, i32),
}

impl ScreenBuffer {
    /// Allocate `width x height` cells filled with `fill` in the default style.
    pub fn new(width: u16, height: u16, fill: char) -> Result<Self> {
        ensure_positive("screen", width, height)?;
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![Cell::plain(fill); len],
            offset: (0, 0),
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    pub fn set_offset(&mut self, x: i32, y: i32) {
        self.offset = (x, y);
    }

    /// Resize the buffer, refilling it with `fill`.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16, fill: char) -> Result<()> {
        ensure_positive("screen", width, height)?;
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::plain(fill));
        Ok(())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Overwrite one cell; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, fill: char) {
        self.cells.fill(Cell::plain(fill));
    }

    /// Write `text` left to right starting at `position`.
    ///
    /// Characters landing outside the buffer (either side, including
    /// negative coordinates) are skipped.
    pub fn render_text(&mut self, text: &str, position: (i32, i32), style: CellStyle) {
        let (x, y) = position;
        if y < 0 || y >= self.height as i32 {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let cx = x.saturating_add(i as i32);
            if cx >= self.width as i32 {
                break;
            }
            self.set(cx, y, Cell { ch, style });
        }
    }

    pub fn render_text_default(&mut self, text: &str, position: (i32, i32)) {
        self.render_text(text, position, CellStyle::default());
    }

    /// Composite the buffer into an `output`-sized frame.
    ///
    /// Returns `output.height` lines of `output.width` glyphs. Glyphs covered
    /// by the buffer (shifted by its offset) carry their style escape and a
    /// reset trailer; everything else is a bare space.
    pub fn flush(&self, output: Viewport) -> Vec<String> {
        let (ox, oy) = self.offset;
        let mut lines = Vec::with_capacity(output.height as usize);
        for y in 0..output.height as i32 {
            let mut line = String::with_capacity(output.width as usize);
            for x in 0..output.width as i32 {
                match self.get(x - ox, y - oy) {
                    // Writing into a String cannot fail.
                    Some(cell) => {
                        let _ = encode_cell_into(&mut line, cell);
                    }
                    None => line.push(' '),
                }
            }
            lines.push(line);
        }
        lines
    }

    /// Plain characters of row `y`, without styling.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = (y as usize) * (self.width as usize);
        self.cells[start..start + self.width as usize]
            .iter()
            .map(|cell| cell.ch)
            .collect()
    }

    /// Read back `len` plain characters starting at `position`, clipped.
    pub fn text_at(&self, position: (i32, i32), len: usize) -> String {
        let (x, y) = position;
        (0..len as i32)
            .filter_map(|i| self.get(x + i, y))
            .map(|cell| cell.ch)
            .collect()
    }
}
