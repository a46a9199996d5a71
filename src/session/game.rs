//! The game session state machine.
//!
//! A `GameSession` owns the board, score, status, RNG and sink. It is the
//! only place where a board is mutated during play:
//!
//! ```text
//! Idle --start--> Playing --make_move--> Playing | Win | Lose
//!   any --restart--> Playing
//! ```

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::sink::{NullSink, PresentationSink, SessionEvent};
use super::status::Status;
use crate::board::Board;
use crate::core::{BoardError, Direction, GameConfig, GameError, GameRng, Result, Score, Tile};
use crate::rules::{apply_move, has_legal_move, Spawn, TileSpawner};

/// What a call to [`GameSession::make_move`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveReport {
    /// Nothing could slide; board, score and status are unchanged.
    NoOp,
    /// Tiles slid and a new tile was spawned.
    Moved {
        score_delta: Score,
        spawned: Option<Spawn>,
        status: Status,
    },
}

impl MoveReport {
    /// True if the board changed.
    #[must_use]
    pub const fn has_update(&self) -> bool {
        matches!(self, MoveReport::Moved { .. })
    }

    /// Points earned by this move.
    #[must_use]
    pub const fn score_delta(&self) -> Score {
        match self {
            MoveReport::NoOp => 0,
            MoveReport::Moved { score_delta, .. } => *score_delta,
        }
    }
}

/// Serializable view of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub score: Score,
    pub status: Status,
    pub moves: u32,
}

/// A single game.
pub struct GameSession<S = NullSink> {
    config: GameConfig,
    spawner: TileSpawner,
    rng: GameRng,
    board: Board,
    score: Score,
    status: Status,
    moves: u32,
    sink: S,
}

impl GameSession<NullSink> {
    /// Create an idle session without a presentation sink.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_sink(config, GameRng::new(seed), NullSink)
    }
}

impl<S: PresentationSink> GameSession<S> {
    /// Create an idle session that reports to `sink`.
    pub fn with_sink(config: GameConfig, rng: GameRng, sink: S) -> Result<Self> {
        config.validate()?;
        debug!(
            "new {}x{} session, target {}, seed {}",
            config.size,
            config.size,
            config.target,
            rng.seed()
        );

        Ok(Self {
            spawner: TileSpawner::new(config.four_probability)?,
            board: Board::empty(config.size),
            config,
            rng,
            score: 0,
            status: Status::Idle,
            moves: 0,
            sink,
        })
    }

    // === Lifecycle ===

    /// Place the initial tiles and begin play.
    ///
    /// Only valid while idle; use [`restart`](Self::restart) afterwards.
    pub fn start(&mut self) -> Result<()> {
        self.require(Status::Idle, "start")?;
        debug!("starting game");
        self.begin();
        Ok(())
    }

    /// Begin play from a caller-supplied board instead of random tiles.
    ///
    /// The board must match the configured size and hold at least one tile.
    /// A board that is already won or stuck ends the game immediately. On
    /// error nothing changes.
    pub fn start_from(&mut self, rows: Vec<Vec<Tile>>) -> Result<()> {
        self.require(Status::Idle, "start")?;

        let board = Board::from_rows(rows)?;
        if board.size() != self.config.size {
            return Err(BoardError::SizeMismatch {
                expected: self.config.size,
                actual: board.size(),
            }
            .into());
        }
        if board.max_tile() == 0 {
            return Err(BoardError::NoTiles.into());
        }
        debug!("starting game from board:\n{board}");

        self.reset(board);
        self.sink.render(&self.board);
        self.enter_play();
        Ok(())
    }

    /// Throw away the current game and start a new one. Valid in any status.
    pub fn restart(&mut self) {
        debug!("restarting game from {} (score {})", self.status, self.score);
        self.set_status(Status::Idle);
        self.begin();
    }

    // === Play ===

    /// Slide all tiles in `direction`.
    ///
    /// Fails with `InvalidState` unless the game is being played; a failed
    /// call leaves the session untouched. A slide that changes nothing
    /// returns `MoveReport::NoOp` and spawns nothing.
    pub fn make_move(&mut self, direction: Direction) -> Result<MoveReport> {
        self.require(Status::Playing, "move")?;

        let outcome = apply_move(&self.board, direction);
        if !outcome.moved {
            trace!("move {direction}: nothing to slide");
            return Ok(MoveReport::NoOp);
        }

        self.board = outcome.board;
        self.score = self.score.saturating_add(outcome.score);
        self.moves += 1;
        trace!("move {direction}: +{} (score {})", outcome.score, self.score);
        self.sink.on_event(&SessionEvent::Moved {
            direction,
            score_delta: outcome.score,
        });
        self.sink.render(&self.board);

        let spawned = self.spawn_tile();
        let status = self.evaluate();
        self.set_status(status);

        Ok(MoveReport::Moved {
            score_delta: outcome.score,
            spawned,
            status,
        })
    }

    /// Like [`make_move`](Self::make_move), with the direction given by name.
    pub fn make_move_named(&mut self, direction: &str) -> Result<MoveReport> {
        let direction = direction.parse()?;
        self.make_move(direction)
    }

    // === Accessors ===

    /// Copy of the board. Changing it never affects the session.
    #[must_use]
    pub fn state(&self) -> Board {
        self.board.clone()
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of moves that changed the board since the last start.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the session RNG, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.state(),
            score: self.score,
            status: self.status,
            moves: self.moves,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // === Internals ===

    fn require(&self, expected: Status, operation: &'static str) -> Result<()> {
        if self.status == expected {
            Ok(())
        } else {
            debug!("rejected {operation} while {}", self.status);
            Err(GameError::InvalidState {
                operation,
                status: self.status,
            })
        }
    }

    /// Clear the board, place the initial tiles and enter `Playing`.
    fn begin(&mut self) {
        self.reset(Board::empty(self.config.size));
        for _ in 0..self.config.initial_tiles {
            self.spawn_tile();
        }
        self.enter_play();
    }

    /// Move to `Playing`, then straight on to `Win`/`Lose` if the board is
    /// already decided.
    fn enter_play(&mut self) {
        self.set_status(Status::Playing);
        let status = self.evaluate();
        self.set_status(status);
    }

    fn reset(&mut self, board: Board) {
        self.board = board;
        self.score = 0;
        self.moves = 0;
        self.sink.on_event(&SessionEvent::Started);
    }

    fn spawn_tile(&mut self) -> Option<Spawn> {
        let spawn = self.spawner.spawn(&mut self.board, &mut self.rng)?;
        self.sink.on_event(&SessionEvent::Spawned(spawn));
        self.sink.render(&self.board);
        Some(spawn)
    }

    /// Status the current board implies for a game in progress.
    fn evaluate(&self) -> Status {
        if self.board.max_tile() >= self.config.target {
            Status::Win
        } else if self.board.is_full() && !has_legal_move(&self.board) {
            Status::Lose
        } else {
            Status::Playing
        }
    }

    fn set_status(&mut self, status: Status) {
        if status == self.status {
            return;
        }
        let from = self.status;
        self.status = status;

        if status.is_terminal() {
            info!(
                "game over: {status} with score {} after {} moves (max tile {})",
                self.score,
                self.moves,
                self.board.max_tile()
            );
        }
        self.sink.on_event(&SessionEvent::StatusChanged { from, to: status });
    }
}

/// Builder for creating a `GameSession`.
pub struct GameSessionBuilder<S = NullSink> {
    config: GameConfig,
    seed: Option<u64>,
    sink: S,
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seed: None,
            sink: NullSink,
        }
    }
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> GameSessionBuilder<S> {
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    pub fn target(mut self, target: Tile) -> Self {
        self.config.target = target;
        self
    }

    pub fn four_probability(mut self, probability: f64) -> Self {
        self.config.four_probability = probability;
        self
    }

    pub fn initial_tiles(mut self, count: usize) -> Self {
        self.config.initial_tiles = count;
        self
    }

    /// Fix the RNG seed. Without one, a random seed is drawn.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Report board changes to `sink`.
    pub fn sink<T: PresentationSink>(self, sink: T) -> GameSessionBuilder<T> {
        GameSessionBuilder {
            config: self.config,
            seed: self.seed,
            sink,
        }
    }

    /// Validate the configuration and create an idle session.
    pub fn build(self) -> Result<GameSession<S>>
    where
        S: PresentationSink,
    {
        let rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        GameSession::with_sink(self.config, rng, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(rows: Vec<Vec<Tile>>) -> GameSession {
        let mut session = GameSession::new(GameConfig::default(), 42).unwrap();
        session.start_from(rows).unwrap();
        session
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(GameConfig::default(), 42).unwrap();

        assert_eq!(session.status(), Status::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.state(), Board::empty(4));
        assert_eq!(session.seed(), 42);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = GameSession::new(GameConfig::default().with_size(1), 42);
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_start_places_two_tiles() {
        let mut session = GameSession::new(GameConfig::default(), 42).unwrap();
        session.start().unwrap();

        assert_eq!(session.status(), Status::Playing);
        assert_eq!(session.board().empty_count(), 14);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut session = GameSession::new(GameConfig::default(), 42).unwrap();
        session.start().unwrap();
        let before = session.snapshot();

        let err = session.start().unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidState {
                operation: "start",
                status: Status::Playing
            }
        );
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_move_while_idle_rejected() {
        let mut session = GameSession::new(GameConfig::default(), 42).unwrap();

        let err = session.make_move(Direction::Left).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidState {
                status: Status::Idle,
                ..
            }
        ));
        assert_eq!(session.board().empty_count(), 16);
    }

    #[test]
    fn test_move_scores_and_spawns() {
        let mut session = playing(vec![
            vec![2, 2, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);

        let report = session.make_move(Direction::Left).unwrap();

        assert_eq!(report.score_delta(), 4);
        assert_eq!(session.score(), 4);
        assert_eq!(session.move_count(), 1);
        assert_eq!(session.board().get(0, 0), 4);
        // Merged tile plus one spawn
        assert_eq!(session.board().empty_count(), 14);
        match report {
            MoveReport::Moved { spawned: Some(spawn), status, .. } => {
                assert_eq!(status, Status::Playing);
                assert_eq!(session.board().get(spawn.row, spawn.col), spawn.value);
            }
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_noop_move() {
        let mut session = playing(vec![
            vec![2, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        let before = session.snapshot();

        assert_eq!(session.make_move(Direction::Left).unwrap(), MoveReport::NoOp);
        assert_eq!(session.make_move(Direction::Up).unwrap(), MoveReport::NoOp);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_state_is_a_copy() {
        let mut session = playing(vec![
            vec![2, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 4],
        ]);

        let mut copy = session.state();
        copy.set(1, 1, 1024);

        assert_eq!(session.board().get(1, 1), 0);
        assert_ne!(session.state(), copy);
        assert!(session.make_move(Direction::Left).unwrap().has_update());
        assert_eq!(copy.get(3, 3), 4);
    }

    #[test]
    fn test_start_from_wrong_size() {
        let mut session = GameSession::new(GameConfig::default(), 42).unwrap();

        let err = session.start_from(vec![vec![0, 0], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidBoard(BoardError::SizeMismatch {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(session.status(), Status::Idle);
    }

    #[test]
    fn test_start_from_empty_board_rejected() {
        let mut session = GameSession::new(GameConfig::default(), 42).unwrap();

        let err = session.start_from(vec![vec![0; 4]; 4]).unwrap_err();
        assert_eq!(err, GameError::InvalidBoard(BoardError::NoTiles));
        assert_eq!(session.status(), Status::Idle);

        // A single tile is enough to play
        let mut rows = vec![vec![0; 4]; 4];
        rows[3][0] = 2;
        session.start_from(rows).unwrap();
        assert_eq!(session.status(), Status::Playing);
        assert!(has_legal_move(session.board()));
    }

    #[test]
    fn test_start_from_won_board() {
        let session = playing(vec![
            vec![2048, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(session.status(), Status::Win);
    }

    #[test]
    fn test_restart_resets() {
        let mut session = playing(vec![
            vec![2, 2, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        session.make_move(Direction::Left).unwrap();
        assert!(session.score() > 0);

        session.restart();

        assert_eq!(session.status(), Status::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.board().empty_count(), 14);
    }

    #[test]
    fn test_named_move() {
        let mut session = playing(vec![
            vec![0, 0, 0, 2],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);

        assert!(session.make_move_named("left").unwrap().has_update());
        assert_eq!(
            session.make_move_named("forward"),
            Err(GameError::InvalidDirection("forward".into()))
        );
    }

    #[test]
    fn test_builder() {
        let session = GameSessionBuilder::new()
            .size(5)
            .target(256)
            .four_probability(0.0)
            .initial_tiles(3)
            .seed(9)
            .build()
            .unwrap();

        assert_eq!(session.config().size, 5);
        assert_eq!(session.config().target, 256);
        assert_eq!(session.seed(), 9);
        assert_eq!(session.state().size(), 5);
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let result = GameSessionBuilder::new().target(100).build();
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = |seed| {
            let mut session = GameSession::new(GameConfig::default(), seed).unwrap();
            session.start().unwrap();
            for d in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
                let _ = session.make_move(d);
            }
            session.snapshot()
        };

        assert_eq!(play(5), play(5));
    }
}
