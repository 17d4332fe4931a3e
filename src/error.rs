//! Error types for grid and tracker construction.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid grid dimension: {width}x{height} (both must be positive)")]
    InvalidDimension { width: usize, height: usize },

    #[error("invalid window capacity: {0} (must be positive)")]
    InvalidCapacity(usize),

    #[error("invalid density: {0} (must be finite)")]
    InvalidDensity(f64),

    #[error("cell count mismatch: expected {expected}, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("invalid glyph {glyph:?} on line {line}")]
    InvalidGlyph { glyph: char, line: usize },

    #[error("ragged row on line {line}: expected {expected} cells, got {actual}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("buffer is {expected_width}x{expected_height} but grid is {width}x{height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
}
