use thiserror::Error;

use crate::types::Tile;

/// Errors raised while constructing boards and screen buffers.
///
/// Play itself never fails: moves, spawns, and rendering absorb their
/// anomalies locally. Only construction with bad geometry or bad seed data
/// is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A width or height of zero was supplied
    #[error("degenerate {what} geometry: {width}x{height}")]
    DegenerateGeometry {
        what: &'static str,
        width: u16,
        height: u16,
    },

    /// Rows passed to `Board::from_rows` differ in length
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A seeded tile is neither empty nor a power of two >= 2
    #[error("invalid tile value {value} at ({x}, {y})")]
    InvalidTile { x: usize, y: usize, value: Tile },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject zero-sized geometry.
pub fn ensure_positive(what: &'static str, width: u16, height: u16) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::DegenerateGeometry {
            what,
            width,
            height,
        });
    }
    Ok(())
}
