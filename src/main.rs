//! Terminal 2048 runner (default binary).
//!
//! Each turn: query the terminal size, draw the board into a screen buffer,
//! print it, read a move (typed line or key press), apply it, spawn a tile.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_2048::core::Board;
use tui_2048::input::{handle_key_event, parse_command, stdin_lines, Command, LineSource};
use tui_2048::term::{BoardView, TerminalRenderer, Viewport};
use tui_2048::{logging, Game, GameConfig, InputMode, Turn, PROMPT};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter(config.input_mode == InputMode::Keys)?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let seed = config.resolve_seed();
    info!(
        seed,
        width = config.grid.width,
        height = config.grid.height,
        input = ?config.input_mode,
        "starting game"
    );

    let board = Board::new(config.grid, config.box_size, seed)?;
    let mut game = Game::new(board, config.offset)?.with_view(BoardView::new(config.border));
    let mut lines = stdin_lines();

    loop {
        // Leave the last terminal row for the prompt.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w.max(1), h.saturating_sub(1).max(1));
        let frame = game.frame(viewport)?;
        term.present(&frame)?;

        let command = match config.input_mode {
            InputMode::Line => match lines.read_line(PROMPT)? {
                Some(line) => parse_command(&line),
                None => Command::Quit,
            },
            InputMode::Keys => match read_key_command()? {
                Some(command) => command,
                // Resized: redraw without taking a turn.
                None => continue,
            },
        };

        if game.apply(command) == Turn::Quit {
            return Ok(());
        }
    }
}

/// Block until a recognised key press. `None` on terminal resize.
fn read_key_command() -> Result<Option<Command>> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match handle_key_event(key) {
                Command::Unknown => {}
                command => return Ok(Some(command)),
            },
            Event::Resize(_, _) => return Ok(None),
            _ => {}
        }
    }
}
