//! Random tile placement after a successful move.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::config::check_probability;
use crate::core::{GameRng, Result, Tile};

/// A tile placed by the spawner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Places 2s and 4s into empty cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSpawner {
    four_probability: f64,
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self {
            four_probability: 0.1,
        }
    }
}

impl TileSpawner {
    /// Create a spawner that yields a 4 with the given probability.
    ///
    /// Fails with `InvalidConfig` unless the probability lies in `[0, 1]`.
    pub fn new(four_probability: f64) -> Result<Self> {
        check_probability(four_probability)?;
        Ok(Self { four_probability })
    }

    /// Fill one uniformly chosen empty cell.
    ///
    /// Returns `None` without touching the board when it is full.
    pub fn spawn(&self, board: &mut Board, rng: &mut GameRng) -> Option<Spawn> {
        let slot = rng.gen_index(board.empty_count())?;
        let (row, col) = board.empty_cells().nth(slot)?;
        let value = if rng.gen_bool(self.four_probability) { 4 } else { 2 };

        board.set(row, col, value);
        trace!("spawned {value} at ({row}, {col})");

        Some(Spawn { row, col, value })
    }
}
