//! Tile colours.
//!
//! Each enumerated tile value has its own style. Anything past the table
//! (4096 and beyond) renders with [`FALLBACK_TILE_STYLE`] instead of failing.

use tracing::debug;

use crate::fb::{CellStyle, Rgb};
use crate::types::Tile;

const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Largest tile value with a dedicated style.
pub const MAX_STYLED_TILE: Tile = 2048;

/// Style for tiles beyond the table.
pub const FALLBACK_TILE_STYLE: CellStyle =
    CellStyle::new(Some(LIGHT_TEXT), Some(Rgb::new(60, 58, 50)), true);

const fn tile(fg: Rgb, bg: Rgb) -> CellStyle {
    CellStyle::new(Some(fg), Some(bg), true)
}

/// Style for a tile value. Empty and unknown values get the fallback.
pub fn tile_style(value: Tile) -> CellStyle {
    match value {
        2 => tile(DARK_TEXT, Rgb::new(238, 228, 218)),
        4 => tile(DARK_TEXT, Rgb::new(237, 224, 200)),
        8 => tile(LIGHT_TEXT, Rgb::new(242, 177, 121)),
        16 => tile(LIGHT_TEXT, Rgb::new(245, 149, 99)),
        32 => tile(LIGHT_TEXT, Rgb::new(246, 124, 95)),
        64 => tile(LIGHT_TEXT, Rgb::new(246, 94, 59)),
        128 => tile(LIGHT_TEXT, Rgb::new(237, 207, 114)),
        256 => tile(LIGHT_TEXT, Rgb::new(237, 204, 97)),
        512 => tile(LIGHT_TEXT, Rgb::new(237, 200, 80)),
        1024 => tile(LIGHT_TEXT, Rgb::new(237, 197, 63)),
        2048 => tile(LIGHT_TEXT, Rgb::new(237, 194, 46)),
        _ => {
            debug!(value, "no dedicated tile style; using fallback");
            FALLBACK_TILE_STYLE
        }
    }
}
