//! The N x N grid of tiles.
//!
//! Cells are stored row-major in a single owned buffer, so `clone` is always
//! a deep copy and two boards never share storage.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::core::{BoardError, Position, Tile, MAX_TILE, MIN_BOARD_SIZE};

/// Square board of tiles.
///
/// Serializes as a list of rows; deserializing goes through
/// [`Board::from_rows`], so a decoded board is always valid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
}

impl Board {
    /// Create a board of `size` x `size` empty cells.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a board from rows supplied by a caller.
    ///
    /// Every row must have as many cells as there are rows, and every
    /// non-zero value must be a power of two from 2 to [`MAX_TILE`].
    ///
    /// ```
    /// use rust_2048::board::Board;
    ///
    /// let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(board.get(1, 1), 4);
    ///
    /// assert!(Board::from_rows(vec![vec![3, 0], vec![0, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::TooSmall(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Assemble a board from rows produced by the engine itself.
    pub(crate) fn from_lines<I, L>(size: usize, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[Tile]>,
    {
        let mut cells = Vec::with_capacity(size * size);
        for line in lines {
            cells.extend_from_slice(line.as_ref());
        }
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Edge length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at `(row, col)`.
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self[(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) {
        debug_assert!(is_valid_tile(value));
        let idx = self.offset(row, col);
        self.cells[idx] = value;
    }

    /// One row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Owned copy of all rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.iter_rows().map(<[Tile]>::to_vec).collect()
    }

    /// Lazy row-major iterator over empty cells.
    ///
    /// Call again to restart from the first cell.
    pub fn empty_cells(&self) -> EmptyCells<'_> {
        EmptyCells {
            board: self,
            index: 0,
        }
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&t| t == 0).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&t| t != 0)
    }

    /// Largest tile on the board, 0 if empty.
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles, saturating at `Tile::MAX`.
    #[must_use]
    pub fn sum(&self) -> Tile {
        self.cells.iter().fold(0, |acc: Tile, &t| acc.saturating_add(t))
    }

    /// New board with rows and columns swapped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let n = self.size;
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..n {
            for row in 0..n {
                cells.push(self.cells[row * n + col]);
            }
        }
        Self { size: n, cells }
    }

    /// New board with every row mirrored.
    #[must_use]
    pub fn reverse_rows(&self) -> Self {
        let mut cells = self.cells.clone();
        for row in cells.chunks_mut(self.size.max(1)) {
            row.reverse();
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// True if two orthogonally adjacent cells hold the same non-zero tile.
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        (0..n).any(|row| {
            (0..n).any(|col| {
                let t = self.cells[row * n + col];
                t != 0
                    && t < MAX_TILE
                    && ((col + 1 < n && self.cells[row * n + col + 1] == t)
                        || (row + 1 < n && self.cells[(row + 1) * n + col] == t))
            })
        })
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        let n = self.size;
        assert!(row < n && col < n, "cell ({row}, {col}) out of range for {n}x{n} board");
        row * n + col
    }
}

impl Index<Position> for Board {
    type Output = Tile;

    fn index(&self, (row, col): Position) -> &Self::Output {
        &self.cells[self.offset(row, col)]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &tile) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if tile == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{tile:>width$}")?;
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Tile>> {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

/// Iterator returned by [`Board::empty_cells`].
#[derive(Debug, Clone)]
pub struct EmptyCells<'a> {
    board: &'a Board,
    index: usize,
}

impl Iterator for EmptyCells<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.board.size;
        while self.index < self.board.cells.len() {
            let idx = self.index;
            self.index += 1;
            if self.board.cells[idx] == 0 {
                return Some((idx / n, idx % n));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.board.cells.len() - self.index))
    }
}

/// 0, or a power of two in `2..=MAX_TILE`.
pub(crate) fn is_valid_tile(value: Tile) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}
