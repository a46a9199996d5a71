//! Move engine: applies the line slide across a whole board.
//!
//! Every direction is reduced to "left": vertical directions transpose the
//! board first and back afterwards, and reversed directions mirror each row
//! around the slide.
//!
//! All transforms return new boards; the input is never modified.

use crate::board::{slide_line, Board};
use crate::core::{Direction, Score};

/// Result of sliding a whole board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after the slide (before any spawn).
    pub board: Board,
    /// Sum of the score gained on every line.
    pub score: Score,
    /// True iff at least one line changed.
    pub moved: bool,
}

/// Slide `board` in `direction`.
///
/// ```
/// use rust_2048::board::Board;
/// use rust_2048::core::Direction;
/// use rust_2048::rules::apply_move;
///
/// let board = Board::from_rows(vec![vec![2, 0], vec![2, 4]]).unwrap();
/// let out = apply_move(&board, Direction::Up);
///
/// assert!(out.moved);
/// assert_eq!(out.score, 4);
/// assert_eq!(out.board.rows(), vec![vec![4, 4], vec![0, 0]]);
/// ```
#[must_use]
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    if !direction.is_vertical() {
        return slide_rows(board, direction.is_reversed());
    }
    let out = slide_rows(&board.transpose(), direction.is_reversed());
    MoveOutcome {
        board: out.board.transpose(),
        ..out
    }
}

/// Whether sliding in `direction` would change the board.
#[must_use]
pub fn can_move(board: &Board, direction: Direction) -> bool {
    apply_move(board, direction).moved
}

/// Whether any of the four directions would change the board.
#[must_use]
pub fn has_legal_move(board: &Board) -> bool {
    Direction::ALL.into_iter().any(|d| can_move(board, d))
}

/// Directions that would change the board, in `Direction::ALL` order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(board, d))
        .collect()
}

fn slide_rows(board: &Board, reversed: bool) -> MoveOutcome {
    if reversed {
        let out = slide_left(&board.reverse_rows());
        return MoveOutcome {
            board: out.board.reverse_rows(),
            ..out
        };
    }
    slide_left(board)
}

fn slide_left(board: &Board) -> MoveOutcome {
    let mut score: Score = 0;
    let mut moved = false;
    let lines: Vec<_> = board
        .iter_rows()
        .map(|row| {
            let out = slide_line(row);
            score = score.saturating_add(out.score);
            moved |= out.changed;
            out.tiles
        })
        .collect();

    MoveOutcome {
        board: Board::from_lines(board.size(), lines),
        score,
        moved,
    }
}
