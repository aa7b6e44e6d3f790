//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: the tile grid, the slide/merge
//! resolution, and tile spawning. It has **no dependencies** on terminal
//! rendering or I/O, making it:
//!
//! - **Deterministic**: the spawn RNG is owned by the board, so a seed fixes a game
//! - **Testable**: boards can be built from explicit rows
//! - **Portable**: can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: tile grid, move resolution, spawning
//! - [`error`]: construction errors
//! - [`rng`]: small seedable LCG implementing `rand_core::RngCore`
//!
//! # Game Rules
//!
//! - A move visits tiles starting from the edge they travel towards
//! - Tiles slide through empty slots until blocked
//! - Two equal tiles merge into one of double value; a tile merges at most once per move
//! - After each move the caller spawns a tile (2, or 4 half of the time)
//! - Spawning probes random slots a bounded number of times and may place nothing
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, SimpleRng};
//! use tui_2048_types::{BoxSize, Direction};
//!
//! let mut board = Board::from_rows(
//!     &[&[2, 2, 4, 0]],
//!     BoxSize::default(),
//!     SimpleRng::new(7),
//! )
//! .unwrap();
//!
//! let summary = board.make_move(Direction::Left);
//! assert_eq!(board.rows(), vec![vec![4, 4, 0, 0]]);
//! assert_eq!(summary.merges, 1);
//!
//! // Spawning may miss on a crowded board; it never places more than one tile.
//! board.generate_piece(true);
//! assert!(board.tile_count() <= 3);
//! ```

pub mod board;
pub mod error;
pub mod rng;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveSummary};
pub use error::{Error, Result};
pub use rng::SimpleRng;
