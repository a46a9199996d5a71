//! Game configuration.
//!
//! A `GameConfig` fixes the board size, the winning tile and how new tiles
//! are spawned. Every session validates its config before the first move.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::{Tile, MAX_TILE};

/// Smallest board edge the engine supports.
pub const MIN_BOARD_SIZE: usize = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length N (default: 4).
    pub size: usize,

    /// Tile value that wins the game (default: 2048).
    /// Must be a power of two from 4 to `MAX_TILE`.
    pub target: Tile,

    /// Probability that a spawned tile is a 4 rather than a 2 (default: 0.1).
    pub four_probability: f64,

    /// Tiles placed by `start` and `restart` (default: 2, at least 1).
    pub initial_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 4,
            target: 2048,
            four_probability: 0.1,
            initial_tiles: 2,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Create a new config with custom winning tile.
    #[must_use]
    pub fn with_target(mut self, target: Tile) -> Self {
        self.target = target;
        self
    }

    /// Create a new config with custom probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Create a new config with custom number of starting tiles.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Check that the config describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "board size must be at least {MIN_BOARD_SIZE}, got {}",
                self.size
            )));
        }
        if !(4..=MAX_TILE).contains(&self.target) || !self.target.is_power_of_two() {
            return Err(GameError::InvalidConfig(format!(
                "target must be a power of two in 4..=2^62, got {}",
                self.target
            )));
        }
        check_probability(self.four_probability)?;
        if self.initial_tiles == 0 || self.initial_tiles > self.cell_count() {
            return Err(GameError::InvalidConfig(format!(
                "cannot start with {} initial tiles on {} cells",
                self.initial_tiles,
                self.cell_count()
            )));
        }
        Ok(())
    }
}

/// Reject spawn probabilities outside `[0, 1]`, including NaN.
pub(crate) fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(GameError::InvalidConfig(format!(
            "four_probability must be within [0, 1], got {probability}"
        )))
    }
}
