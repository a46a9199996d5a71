//! # rust-2048
//!
//! Rules engine for the 2048 sliding-tile puzzle.
//!
//! ## Design Principles
//!
//! 1. **Pure transforms**: Sliding a board returns a new board. Transpose and
//!    mirror are ordinary functions whose results are always used.
//!
//! 2. **Explicit sessions**: No global game. Each `GameSession` owns its
//!    board, score, status and RNG, so any number can run side by side.
//!
//! 3. **Injected randomness and output**: Spawns come from a seedable
//!    `GameRng`; drawing is delegated to a `PresentationSink`.
//!
//! ## Modules
//!
//! - `core`: Tiles, directions, RNG, configuration, errors
//! - `board`: The N x N grid and the single-line slide/merge
//! - `rules`: Move engine and tile spawner
//! - `session`: Game state machine, status and presentation sink
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, GameConfig, GameSession, Status};
//!
//! let mut session = GameSession::new(GameConfig::default(), 42).unwrap();
//! session.start().unwrap();
//! assert_eq!(session.status(), Status::Playing);
//!
//! // Two starting tiles, plus one more if anything slid
//! session.make_move(Direction::Left).unwrap();
//! assert!(session.board().empty_count() <= 14);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Direction, GameConfig, GameError, GameRng, Position, Result, Score, Tile,
    MAX_TILE,
};

pub use crate::board::{slide_line, Board, LineOutcome};

pub use crate::rules::{apply_move, has_legal_move, MoveOutcome, Spawn, TileSpawner};

pub use crate::session::{
    FnSink, GameSession, GameSessionBuilder, GameSnapshot, MoveReport, NullSink,
    PresentationSink, SessionEvent, Status,
};
