//! Errors raised by the maze core

use thiserror::Error;

use crate::Cell;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Both dimensions must be odd and at least 3
    #[error("invalid maze dimensions {rows}x{cols}: both must be odd and at least 3")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },

    /// Solver endpoint placed on a wall
    #[error("cell {cell} is a wall, not a passage")]
    InvalidCell { cell: Cell },

    #[error("unexpected character `{glyph}` at row={row}, col={col}")]
    UnexpectedGlyph { glyph: char, row: usize, col: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, MazeError>;
