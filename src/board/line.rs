//! Compaction and merging of a single line.
//!
//! A line is one row, or one column after the board has been transposed
//! and/or mirrored so that tiles always slide toward index 0.

use smallvec::SmallVec;

use crate::core::{Score, Tile, MAX_TILE};

/// Lines up to this length stay on the stack.
pub const INLINE_LINE_LEN: usize = 8;

/// Buffer holding one line of tiles.
pub type LineBuf = SmallVec<[Tile; INLINE_LINE_LEN]>;

/// Result of sliding one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineOutcome {
    /// Tiles after the slide, same length as the input.
    pub tiles: LineBuf,
    /// Sum of the tiles created by merges.
    pub score: Score,
    /// True iff `tiles` differs from the input at some position.
    pub changed: bool,
}

/// Slide a line toward index 0, merging equal neighbours once.
///
/// A tile produced by a merge is not merged again in the same slide, so
/// `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`. Tiles at [`MAX_TILE`] only slide.
///
/// ```
/// use rust_2048::board::slide_line;
///
/// let out = slide_line(&[2, 0, 2, 4]);
/// assert_eq!(out.tiles.as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(out.score, 4);
/// assert!(out.changed);
/// ```
#[must_use]
pub fn slide_line(line: &[Tile]) -> LineOutcome {
    let dense: LineBuf = line.iter().copied().filter(|&t| t != 0).collect();

    let mut tiles = LineBuf::with_capacity(line.len());
    let mut score: Score = 0;
    let mut i = 0;
    while i < dense.len() {
        if i + 1 < dense.len() && dense[i] == dense[i + 1] && dense[i] < MAX_TILE {
            let merged = dense[i] * 2;
            tiles.push(merged);
            score = score.saturating_add(merged);
            i += 2;
        } else {
            tiles.push(dense[i]);
            i += 1;
        }
    }
    tiles.resize(line.len(), 0);

    let changed = tiles.as_slice() != line;
    LineOutcome {
        tiles,
        score,
        changed,
    }
}
