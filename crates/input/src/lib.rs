//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps typed lines and
//! `crossterm` key events into [`Command`]s, and provides the line source the
//! game loop reads from.

pub mod map;
pub mod reader;

pub use tui_2048_types as types;

pub use map::{handle_key_event, parse_command, should_quit, Command};
pub use reader::{stdin_lines, LineReader, LineSource, ScriptedLines, StdinLines};
