//! Error types for board validation and session operations.

use thiserror::Error;

use super::Tile;
use crate::session::Status;

/// Why an externally supplied board was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must be at least 2x2, got {0} rows")]
    TooSmall(usize),
    #[error("board is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cell ({row}, {col}) holds {value}, not 0 or a power of two in 2..=2^62")]
    InvalidTile { row: usize, col: usize, value: Tile },
    #[error("board is {actual}x{actual}, but the game is configured for {expected}x{expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("board has no tiles")]
    NoTiles,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot {operation} while the game is {status}")]
    InvalidState {
        operation: &'static str,
        status: Status,
    },
    #[error("unknown direction {0:?}, expected left, right, up or down")]
    InvalidDirection(String),
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
