use crate::maze::Cell;

/// Errors raised by maze construction, wall mutation and distance queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {height}x{width}: both must be at least 1")]
    InvalidDimension { height: usize, width: usize },
    #[error("cell {cell:?} is outside the {height}x{width} grid")]
    InvalidCoordinate {
        cell: Cell,
        height: usize,
        width: usize,
    },
    #[error("cells {a:?} and {b:?} are not contiguous")]
    NotContiguous { a: Cell, b: Cell },
    #[error("no path between {from:?} and {to:?}")]
    NoPath { from: Cell, to: Cell },
}

pub type Result<T> = std::result::Result<T, MazeError>;
