//! The board and the single-line slide/merge algorithm.

pub mod grid;
pub mod line;

pub use grid::{Board, EmptyCells};
pub use line::{slide_line, LineBuf, LineOutcome, INLINE_LINE_LEN};
