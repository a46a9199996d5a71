//! Game rules: how a board slides and how new tiles appear.
//!
//! Both parts are pure with respect to the session: the move engine maps a
//! board to a new board, and the spawner only touches the board and RNG it
//! is handed.

pub mod engine;
pub mod spawner;

pub use engine::{apply_move, can_move, has_legal_move, legal_moves, MoveOutcome};
pub use spawner::{Spawn, TileSpawner};
