//! Core types shared by every layer: tiles, directions, RNG, configuration
//! and errors.

pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use config::{GameConfig, MIN_BOARD_SIZE};
pub use direction::Direction;
pub use error::{BoardError, GameError, Result};
pub use rng::GameRng;

/// Value of a single cell: 0 for empty, otherwise a power of two in
/// `2..=MAX_TILE`.
pub type Tile = u64;

/// Largest tile a board can hold. Two of them never merge, so a slide can
/// never overflow a `Tile`.
pub const MAX_TILE: Tile = 1 << 62;

/// Accumulated score of a session.
pub type Score = u64;

/// Cell coordinates as `(row, col)`.
pub type Position = (usize, usize);
