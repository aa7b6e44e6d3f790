//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, terminal rendering, input mapping).
//!
//! # Geometry
//!
//! Two sizes describe a board:
//!
//! - [`GridSize`]: how many tiles the board holds (default 4x4)
//! - [`BoxSize`]: how many screen cells the interior of one tile box occupies
//!   (default 6x3, borders excluded)
//!
//! # Tiles
//!
//! A [`Tile`] is `0` for an empty slot, otherwise a power of two between `2`
//! and [`MAX_TILE`].
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GridSize, DEFAULT_GRID_SIZE};
//!
//! // Parse a direction token (case-insensitive)
//! assert_eq!(Direction::from_token("L"), Some(Direction::Left));
//! assert_eq!(Direction::from_token("down"), Some(Direction::Down));
//! assert_eq!(Direction::from_token("sideways"), None);
//!
//! // Unit vectors
//! assert_eq!(Direction::Right.vector(), (1, 0));
//! assert_eq!(Direction::Up.vector(), (0, -1));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, GridSize::new(4, 4));
//! ```

/// A tile value: `0` (empty) or a power of two `>= 2`.
pub type Tile = u64;

/// Value spawned when fours are not allowed (and half the time when they are).
pub const BASE_TILE: Tile = 2;

/// The alternative spawn value.
pub const FOUR_TILE: Tile = 4;

/// Chance of spawning a four when fours are allowed.
pub const FOUR_PROBABILITY: f64 = 0.5;

/// Largest tile value. Two of these do not merge, so `2 * MAX_TILE` never
/// has to fit in a [`Tile`].
pub const MAX_TILE: Tile = 1 << 62;

/// Tiles spawned when a board is created.
pub const INITIAL_TILES: usize = 2;

/// Classic 4x4 board.
pub const DEFAULT_GRID_SIZE: GridSize = GridSize::new(4, 4);

/// Six columns by three rows per tile box.
pub const DEFAULT_BOX_SIZE: BoxSize = BoxSize::new(6, 3);

/// Returns true for `0` or a power of two in `2..=MAX_TILE`.
///
/// ```
/// use tui_2048_types::{is_valid_tile, MAX_TILE};
///
/// assert!(is_valid_tile(0));
/// assert!(is_valid_tile(2048));
/// assert!(is_valid_tile(MAX_TILE));
/// assert!(!is_valid_tile(1));
/// assert!(!is_valid_tile(6));
/// assert!(!is_valid_tile(1 << 63));
/// ```
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}

/// Tile grid dimensions (in tiles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of tile slots.
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        DEFAULT_GRID_SIZE
    }
}

/// Interior size of one tile box, in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxSize {
    pub width: u16,
    pub height: u16,
}

impl BoxSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for BoxSize {
    fn default() -> Self {
        DEFAULT_BOX_SIZE
    }
}

/// Move directions
///
/// Screen coordinates grow right (+x) and down (+y):
/// - **Right**: `(+1, 0)`
/// - **Left**: `(-1, 0)`
/// - **Down**: `(0, +1)`
/// - **Up**: `(0, -1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step for this direction as `(dx, dy)`.
    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse a direction token (case-insensitive)
    ///
    /// Accepts full names or single letters: "left" | "l", "right" | "r",
    /// "up" | "u", "down" | "d". Surrounding whitespace is ignored.
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_token(" Right\n"), Some(Direction::Right));
    /// assert_eq!(Direction::from_token("U"), Some(Direction::Up));
    /// assert_eq!(Direction::from_token(""), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "l" | "left" => Some(Direction::Left),
            "r" | "right" => Some(Direction::Right),
            "u" | "up" => Some(Direction::Up),
            "d" | "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
