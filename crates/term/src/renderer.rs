//! TerminalRenderer: prints flushed screen lines to a real terminal.
//!
//! Every frame is a full redraw: clear, then one line per terminal row. The
//! cursor is left on the row below the frame so a prompt can follow it.

use std::fmt;
use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, Command, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    raw: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            raw: false,
        }
    }

    /// Switch to the alternate screen.
    ///
    /// With `raw` set, raw mode is enabled and the cursor hidden (key-press
    /// input); otherwise the cursor stays visible for line input.
    pub fn enter(&mut self, raw: bool) -> Result<()> {
        if raw {
            terminal::enable_raw_mode()?;
        }
        self.raw = raw;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        if raw {
            self.buf.queue(cursor::Hide)?;
        }
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        if self.raw {
            terminal::disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }

    /// Clear the terminal and print one frame of flushed lines.
    pub fn present(&mut self, lines: &[String]) -> Result<()> {
        self.buf.clear();
        encode_frame_into(lines, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(lines: &[String], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for (y, line) in lines.iter().enumerate() {
        let row = u16::try_from(y).unwrap_or(u16::MAX);
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(line))?;
    }
    let below = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    out.queue(cursor::MoveTo(0, below))?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Write one cell: its style escape, the glyph, then a full reset.
pub fn encode_cell_into(out: &mut impl fmt::Write, cell: Cell) -> fmt::Result {
    apply_style_into(out, cell.style)?;
    out.write_char(cell.ch)?;
    ResetColor.write_ansi(out)?;
    SetAttribute(Attribute::Reset).write_ansi(out)
}

fn apply_style_into(out: &mut impl fmt::Write, style: CellStyle) -> fmt::Result {
    if let Some(fg) = style.fg {
        SetForegroundColor(rgb_to_color(fg)).write_ansi(out)?;
    }
    if let Some(bg) = style.bg {
        SetBackgroundColor(rgb_to_color(bg)).write_ansi(out)?;
    }
    if style.bold {
        SetAttribute(Attribute::Bold).write_ansi(out)?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESET: &str = "\x1b[0m";

    #[test]
    fn plain_cell_is_glyph_plus_reset() {
        let mut out = String::new();
        encode_cell_into(&mut out, Cell::plain('x')).unwrap();
        assert!(out.starts_with('x'));
        assert!(out.ends_with(RESET));
    }

    #[test]
    fn styled_cell_sets_colours_before_glyph() {
        let style = CellStyle::new(Some(Rgb::new(1, 2, 3)), Some(Rgb::new(4, 5, 6)), true);
        let mut out = String::new();
        encode_cell_into(&mut out, Cell { ch: '8', style }).unwrap();

        let glyph = out.find('8').unwrap();
        let fg = out.find("38;2;1;2;3").unwrap();
        let bg = out.find("48;2;4;5;6").unwrap();
        assert!(fg < glyph);
        assert!(bg < glyph);
        assert!(out.ends_with(RESET));
    }

    #[test]
    fn frame_places_every_line() {
        let lines = vec!["ab".to_string(), "cd".to_string()];
        let mut out = Vec::new();
        encode_frame_into(&lines, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ab"));
        assert!(text.contains("cd"));
        assert!(text.find("ab").unwrap() < text.find("cd").unwrap());
        // Cursor parks on row 3 (1-based) below the two frame rows.
        assert!(text.contains("\x1b[3;1H"));
    }
}
