//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout frameworks and instead composites text into a
//! [`ScreenBuffer`] that is flushed once per frame to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep all drawing pure (buffer in, buffer out) so it can be asserted on
//! - Confine escape sequences to one place ([`renderer`])

pub mod board_view;
pub mod fb;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use board_view::{frame_size, tile_text_position, BoardView};
pub use fb::{Cell, CellStyle, Rgb, ScreenBuffer, Viewport};
pub use palette::{tile_style, FALLBACK_TILE_STYLE, MAX_STYLED_TILE};
pub use renderer::{encode_cell_into, encode_frame_into, TerminalRenderer};
