//! One game session: a board, the screen it is drawn into, and the turn rule.
//!
//! The binary owns terminal I/O; this type only turns a viewport into frame
//! lines and a [`Command`] into a board update, so whole sessions can be
//! replayed in tests.

use rand::RngCore;
use tracing::{debug, info};

use crate::core::{Board, MoveSummary, Result, SimpleRng};
use crate::input::Command;
use crate::term::{BoardView, ScreenBuffer, Viewport};

/// Prompt shown before each typed move.
pub const PROMPT: &str = "Enter (l, r, u, d) > ";

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// A move was attempted (or the input ignored) and a spawn followed.
    Played {
        summary: Option<MoveSummary>,
        spawned: bool,
    },
    Quit,
}

pub struct Game<R = SimpleRng> {
    board: Board<R>,
    screen: ScreenBuffer,
    view: BoardView,
    offset: (i32, i32),
    turns: u64,
}

impl<R: RngCore> Game<R> {
    pub fn new(board: Board<R>, offset: (i32, i32)) -> Result<Self> {
        Ok(Self {
            board,
            screen: ScreenBuffer::new(1, 1, ' ')?,
            view: BoardView::default(),
            offset,
            turns: 0,
        })
    }

    /// Draw with `view` instead of the default borders.
    pub fn with_view(mut self, view: BoardView) -> Self {
        self.view = view;
        self
    }

    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Draw the board into a screen the size of `viewport` and flush it.
    ///
    /// The screen is rebuilt every frame, so terminal resizes are picked up.
    pub fn frame(&mut self, viewport: Viewport) -> Result<Vec<String>> {
        self.screen.resize(viewport.width, viewport.height, ' ')?;
        self.view.render(&self.board, &mut self.screen, self.offset);
        Ok(self.screen.flush(viewport))
    }

    /// Apply one command: a move (unknown input moves nothing), then a spawn.
    pub fn apply(&mut self, command: Command) -> Turn {
        let summary = match command {
            Command::Quit => {
                info!(turns = self.turns, "quit");
                return Turn::Quit;
            }
            Command::Move(direction) => Some(self.board.make_move(direction)),
            Command::Unknown => None,
        };

        let spawned = self.board.generate_piece(true).is_some();
        self.turns += 1;
        debug!(turn = self.turns, spawned, tiles = self.board.tile_count(), "turn done");

        Turn::Played { summary, spawned }
    }
}
