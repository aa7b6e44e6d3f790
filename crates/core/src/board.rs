//! Board module - manages the tile grid
//!
//! The board is a `width x height` grid where each slot holds `0` (empty) or a
//! power-of-two tile. Uses a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Two operations mutate the grid: [`Board::make_move`] slides and merges
//! tiles, [`Board::generate_piece`] spawns a new tile at a random empty slot.

use std::fmt;

use rand::{Rng, RngCore};
use tracing::{debug, trace};

use crate::error::{ensure_positive, Error, Result};
use crate::rng::SimpleRng;
use crate::types::{
    is_valid_tile, BoxSize, Direction, GridSize, Tile, BASE_TILE, FOUR_PROBABILITY, FOUR_TILE,
    INITIAL_TILES, MAX_TILE,
};

/// What a single [`Board::make_move`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveSummary {
    /// One-slot steps into empty slots
    pub slides: usize,
    /// Pairs of equal tiles combined
    pub merges: usize,
    /// Sum of the tile values produced by merges
    pub merged_value: Tile,
}

impl MoveSummary {
    /// True if any tile moved or merged.
    pub fn changed(&self) -> bool {
        self.slides > 0 || self.merges > 0
    }
}

/// The 2048 board: tile grid, box geometry for rendering, and the spawn RNG.
#[derive(Debug, Clone)]
pub struct Board<R = SimpleRng> {
    size: GridSize,
    box_size: BoxSize,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<Tile>,
    rng: R,
}

impl Board<SimpleRng> {
    /// Create a board seeded with the built-in LCG and spawn the opening tiles.
    pub fn new(size: GridSize, box_size: BoxSize, seed: u32) -> Result<Self> {
        Self::with_rng(size, box_size, SimpleRng::new(seed))
    }
}

impl<R: RngCore> Board<R> {
    /// Create a board using `rng` and spawn the opening tiles (always twos).
    pub fn with_rng(size: GridSize, box_size: BoxSize, rng: R) -> Result<Self> {
        let mut board = Self::empty(size, box_size, rng)?;
        for _ in 0..INITIAL_TILES {
            board.generate_piece(false);
        }
        Ok(board)
    }

    /// Create a board from explicit rows (top to bottom) without spawning.
    ///
    /// Every row must have the same length and every value must be `0` or a
    /// power of two in `2..=MAX_TILE`.
    pub fn from_rows(rows: &[&[Tile]], box_size: BoxSize, rng: R) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.len());
        let size = GridSize::new(
            u16::try_from(width).unwrap_or(0),
            u16::try_from(rows.len()).unwrap_or(0),
        );
        let mut board = Self::empty(size, box_size, rng)?;

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(Error::InvalidTile { x, y, value });
                }
                board.tiles[y * width + x] = value;
            }
        }

        Ok(board)
    }

    fn empty(size: GridSize, box_size: BoxSize, rng: R) -> Result<Self> {
        ensure_positive("grid", size.width, size.height)?;
        ensure_positive("box", box_size.width, box_size.height)?;
        Ok(Self {
            size,
            box_size,
            tiles: vec![0; size.area()],
            rng,
        })
    }

    /// Spawn a tile at a random empty slot
    ///
    /// The value is 4 with probability [`FOUR_PROBABILITY`] when `allow_four`
    /// is set, otherwise 2. Up to `width * height` random probes are made and
    /// the first empty one receives the tile. When every probe lands on an
    /// occupied slot nothing is placed and `None` is returned; this can happen
    /// on a nearly full board too, not only a full one.
    pub fn generate_piece(&mut self, allow_four: bool) -> Option<(u16, u16)> {
        let value = if allow_four && self.rng.gen_bool(FOUR_PROBABILITY) {
            FOUR_TILE
        } else {
            BASE_TILE
        };

        let probes = self.size.area();
        for _ in 0..probes {
            let x = self.rng.gen_range(0..self.size.width);
            let y = self.rng.gen_range(0..self.size.height);
            let idx = self.offset_of(x, y);
            if self.tiles[idx] == 0 {
                self.tiles[idx] = value;
                trace!(x, y, value, "spawned tile");
                return Some((x, y));
            }
        }

        debug!(probes, value, "no empty slot probed; tile not placed");
        None
    }

    /// Apply a move in `direction`
    ///
    /// Tiles are visited in [`Board::scan_order`], so the tile nearest the
    /// far edge settles first. Each tile steps toward the edge while the next
    /// slot is empty; it merges into an equal neighbour only if neither of
    /// them has already merged during this call, and then stays put. Two
    /// [`MAX_TILE`] tiles never merge.
    pub fn make_move(&mut self, direction: Direction) -> MoveSummary {
        let (dx, dy) = direction.vector();
        let mut merged = vec![false; self.tiles.len()];
        let mut summary = MoveSummary::default();

        for (start_x, start_y) in self.scan_order(direction) {
            let (mut x, mut y) = (start_x, start_y);
            let Some(mut current) = self.index(x, y) else {
                continue;
            };

            while self.tiles[current] != 0 {
                let Some(next) = self.index(x + dx, y + dy) else {
                    break;
                };
                let value = self.tiles[current];

                if self.tiles[next] == 0 {
                    self.tiles[next] = value;
                    self.tiles[current] = 0;
                    summary.slides += 1;
                } else if self.tiles[next] == value
                    && value < MAX_TILE
                    && !merged[next]
                    && !merged[current]
                {
                    self.tiles[next] = value * 2;
                    self.tiles[current] = 0;
                    merged[next] = true;
                    summary.merges += 1;
                    summary.merged_value = summary.merged_value.saturating_add(value * 2);
                } else {
                    break;
                }

                x += dx;
                y += dy;
                current = next;
            }
        }

        if summary.changed() {
            debug!(
                direction = direction.as_str(),
                slides = summary.slides,
                merges = summary.merges,
                merged_value = summary.merged_value,
                "applied move"
            );
        } else {
            trace!(direction = direction.as_str(), "move changed nothing");
        }

        summary
    }

    /// Map a direction token (`l/left`, `r/right`, `u/up`, `d/down`, any case)
    /// to a move. Unknown tokens are ignored and return `None`.
    pub fn handle_input(&mut self, token: &str) -> Option<MoveSummary> {
        match Direction::from_token(token) {
            Some(direction) => Some(self.make_move(direction)),
            None => {
                trace!(token, "ignored input");
                None
            }
        }
    }
}

impl<R> Board<R> {
    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.width as i32 || y >= self.size.height as i32 {
            return None;
        }
        Some((y as usize) * (self.size.width as usize) + (x as usize))
    }

    #[inline(always)]
    fn offset_of(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.size.width as usize) + (x as usize)
    }

    /// Visiting order for a move: starts at the edge tiles travel towards.
    ///
    /// - right: each row, columns right to left
    /// - left: each row, columns left to right
    /// - down: each column, rows bottom to top
    /// - up: each column, rows top to bottom
    pub fn scan_order(&self, direction: Direction) -> Vec<(i32, i32)> {
        let w = self.size.width as i32;
        let h = self.size.height as i32;
        match direction {
            Direction::Right => (0..h)
                .flat_map(|y| (0..w).rev().map(move |x| (x, y)))
                .collect(),
            Direction::Left => (0..h).flat_map(|y| (0..w).map(move |x| (x, y))).collect(),
            Direction::Down => (0..w)
                .flat_map(|x| (0..h).rev().map(move |y| (x, y)))
                .collect(),
            Direction::Up => (0..w).flat_map(|x| (0..h).map(move |y| (x, y))).collect(),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn box_size(&self) -> BoxSize {
        self.box_size
    }

    pub fn width(&self) -> u16 {
        self.size.width
    }

    pub fn height(&self) -> u16 {
        self.size.height
    }

    /// Get tile at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Copy of the grid as rows, top to bottom.
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.tiles
            .chunks(self.size.width as usize)
            .map(<[Tile]>::to_vec)
            .collect()
    }

    /// Nonzero tiles as `(x, y, value)` in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (u16, u16, Tile)> + '_ {
        let width = self.size.width as usize;
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, value)| **value != 0)
            .map(move |(i, value)| ((i % width) as u16, (i / width) as u16, *value))
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|value| **value != 0).count()
    }

    /// Sum of all tiles, saturating at `Tile::MAX`.
    pub fn tile_sum(&self) -> Tile {
        self.tiles.iter().fold(0, |sum, value| sum.saturating_add(*value))
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|value| *value != 0)
    }
}

impl<R> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.tiles.chunks(self.size.width as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, value) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>5}", value)?;
            }
        }
        Ok(())
    }
}
