//! Presentation sink: how a session reports board changes to a front end.
//!
//! The session never knows what draws the board. It calls `render` after
//! every spawn and every board-changing slide, and reports lifecycle events
//! through `on_event`. Terminals, canvases and DOM bindings implement the
//! trait on their side.

use serde::{Deserialize, Serialize};

use super::status::Status;
use crate::board::Board;
use crate::core::{Direction, Score};
use crate::rules::Spawn;

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The board was cleared by `start`, `start_from` or `restart`.
    Started,
    /// Tiles slid; `score_delta` is what the merges earned.
    Moved {
        direction: Direction,
        score_delta: Score,
    },
    /// A new tile was placed.
    Spawned(Spawn),
    /// The session changed status.
    StatusChanged { from: Status, to: Status },
}

/// Receiver of board snapshots and session events.
pub trait PresentationSink {
    /// Draw the current board.
    fn render(&mut self, board: &Board);

    /// Observe a session event. Ignored by default.
    fn on_event(&mut self, _event: &SessionEvent) {}
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn render(&mut self, _board: &Board) {}
}

/// Sink backed by a closure over the board.
///
/// ```
/// use rust_2048::session::{FnSink, GameSessionBuilder};
///
/// let mut frames = 0;
/// let mut session = GameSessionBuilder::new()
///     .seed(1)
///     .sink(FnSink(|_board: &rust_2048::board::Board| frames += 1))
///     .build()
///     .unwrap();
/// session.start().unwrap();
/// drop(session);
///
/// assert_eq!(frames, 2);
/// ```
pub struct FnSink<F>(pub F);

impl<F: FnMut(&Board)> PresentationSink for FnSink<F> {
    fn render(&mut self, board: &Board) {
        (self.0)(board);
    }
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn render(&mut self, board: &Board) {
        (**self).render(board);
    }

    fn on_event(&mut self, event: &SessionEvent) {
        (**self).on_event(event);
    }
}

impl<S: PresentationSink + ?Sized> PresentationSink for Box<S> {
    fn render(&mut self, board: &Board) {
        (**self).render(board);
    }

    fn on_event(&mut self, event: &SessionEvent) {
        (**self).on_event(event);
    }
}
