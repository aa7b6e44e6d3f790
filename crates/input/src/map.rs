//! Mapping from typed lines and terminal key events to game commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
    /// Anything unrecognised; the loop treats it as a no-op move.
    Unknown,
}

/// Map a typed line to a command.
///
/// Direction tokens are `l/left`, `r/right`, `u/up`, `d/down`; quit tokens are
/// `q`, `quit`, `exit`. Case and surrounding whitespace are ignored.
pub fn parse_command(line: &str) -> Command {
    let token = line.trim();
    if let Some(direction) = Direction::from_token(token) {
        return Command::Move(direction);
    }
    match token.to_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Unknown,
    }
}

/// Map keyboard input to a command (key-press mode).
pub fn handle_key_event(key: KeyEvent) -> Command {
    if should_quit(key) {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Command::Move(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Command::Move(Direction::Right)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Command::Move(Direction::Down)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Command::Move(Direction::Up)
        }
        _ => Command::Unknown,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
