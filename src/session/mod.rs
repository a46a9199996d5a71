//! Game sessions: the state machine that sequences moves, spawns and
//! win/lose detection, plus the sink it reports to.

pub mod game;
pub mod sink;
pub mod status;

pub use game::{GameSession, GameSessionBuilder, GameSnapshot, MoveReport};
pub use sink::{FnSink, NullSink, PresentationSink, SessionEvent};
pub use status::Status;
