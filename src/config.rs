//! Game configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI_2048_WIDTH` / `TUI_2048_HEIGHT` | 4 / 4 | grid size in tiles |
//! | `TUI_2048_BOX_WIDTH` / `TUI_2048_BOX_HEIGHT` | 6 / 3 | screen cells per tile box |
//! | `TUI_2048_SEED` | random | spawn RNG seed |
//! | `TUI_2048_INPUT` | `line` | `line` (typed tokens) or `keys` (arrow keys) |
//! | `TUI_2048_OFFSET_X` / `TUI_2048_OFFSET_Y` | 0 / 0 | board position on screen |
//! | `TUI_2048_BORDER_COLOR` | terminal default | board border colour, `rrggbb` hex (`#` optional) |
//! | `TUI_2048_LOG_PATH` | unset | write tracing output to this file |
//!
//! Unparsable values fall back to the default.

use std::str::FromStr;

use crate::term::{CellStyle, Rgb};
use crate::types::{BoxSize, GridSize, DEFAULT_BOX_SIZE, DEFAULT_GRID_SIZE};

/// How moves are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// One typed token per turn, confirmed with Enter.
    #[default]
    Line,
    /// Raw key presses (arrows, hjkl, wasd).
    Keys,
}

impl FromStr for InputMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" | "lines" => Ok(InputMode::Line),
            "key" | "keys" => Ok(InputMode::Keys),
            _ => Err(()),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub box_size: BoxSize,
    pub seed: Option<u32>,
    pub input_mode: InputMode,
    pub offset: (i32, i32),
    /// Style of the board's border glyphs.
    pub border: CellStyle,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: DEFAULT_GRID_SIZE,
            box_size: DEFAULT_BOX_SIZE,
            seed: None,
            input_mode: InputMode::Line,
            offset: (0, 0),
            border: CellStyle::default(),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str, default| parse_or(lookup(key), default);

        let grid = GridSize::new(
            parse("TUI_2048_WIDTH", defaults.grid.width),
            parse("TUI_2048_HEIGHT", defaults.grid.height),
        );
        let box_size = BoxSize::new(
            parse("TUI_2048_BOX_WIDTH", defaults.box_size.width),
            parse("TUI_2048_BOX_HEIGHT", defaults.box_size.height),
        );

        let seed = lookup("TUI_2048_SEED").and_then(|s| s.trim().parse().ok());

        let input_mode = lookup("TUI_2048_INPUT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.input_mode);

        let offset = (
            parse_or(lookup("TUI_2048_OFFSET_X"), defaults.offset.0),
            parse_or(lookup("TUI_2048_OFFSET_Y"), defaults.offset.1),
        );

        let border = lookup("TUI_2048_BORDER_COLOR")
            .and_then(|s| parse_hex_rgb(&s))
            .map_or(defaults.border, |rgb| CellStyle::new(Some(rgb), None, false));

        let log_path = lookup("TUI_2048_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            grid,
            box_size,
            seed,
            input_mode,
            offset,
            border,
            log_path,
        }
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// `rrggbb` or `#rrggbb`.
fn parse_hex_rgb(s: &str) -> Option<Rgb> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
