//! N×N board storage and line detection.
//!
//! The board is a flat, row-major `Vec<CellValue>` of exactly `size * size`
//! cells. For `size = 3`:
//!
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```
//!
//! A line combination is a row, a column, or one of the two diagonals.
//! Any line whose cells all hold the same mark is a win.

use smallvec::SmallVec;

use super::cell::{CellValue, Mark};
use super::config::MAX_BOARD_SIZE;

/// Cell indices of one line combination.
/// SmallVec keeps boards up to 8×8 off the heap.
pub type Line = SmallVec<[usize; 8]>;

/// Compute every line combination for an `n`×`n` board.
///
/// Order is fixed: the `n` rows, then the `n` columns, then the main
/// diagonal, then the anti-diagonal.
///
/// ```
/// use rust_tictactoe::core::win_combinations;
///
/// let lines = win_combinations(3);
/// assert_eq!(lines.len(), 8);
/// assert_eq!(lines[0].as_slice(), &[0, 1, 2]);
/// assert_eq!(lines[3].as_slice(), &[0, 3, 6]);
/// assert_eq!(lines[6].as_slice(), &[0, 4, 8]);
/// assert_eq!(lines[7].as_slice(), &[2, 4, 6]);
/// ```
#[must_use]
pub fn win_combinations(n: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * n + 2);

    for row in 0..n {
        lines.push((0..n).map(|col| row * n + col).collect());
    }

    for col in 0..n {
        lines.push((0..n).map(|row| col + row * n).collect());
    }

    lines.push((0..n).map(|i| i * n + i).collect());
    lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());

    lines
}

/// The game board.
///
/// Always holds exactly `size * size` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellValue>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    ///
    /// No lower bound is enforced: a size of 0 gives a board without
    /// cells, on which every index is out of range.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_BOARD_SIZE`]. Use [`Board::try_new`]
    /// for sizes that come from input.
    #[must_use]
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(board) => board,
            None => panic!("Board size {} exceeds maximum {}", size, MAX_BOARD_SIZE),
        }
    }

    /// Create an empty board, or `None` if `size` exceeds [`MAX_BOARD_SIZE`].
    ///
    /// ```
    /// use rust_tictactoe::core::Board;
    ///
    /// assert_eq!(Board::try_new(4).map(|b| b.len()), Some(16));
    /// assert!(Board::try_new(5_000_000_000).is_none());
    /// ```
    #[must_use]
    pub fn try_new(size: usize) -> Option<Self> {
        if size > MAX_BOARD_SIZE {
            return None;
        }
        Some(Self {
            size,
            cells: vec![CellValue::Empty; size * size],
        })
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (N²).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the board has no cells at all (size 0).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Get a cell, or `None` if `index` is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CellValue> {
        self.cells.get(index).copied()
    }

    /// Place a mark on an empty, in-range cell.
    ///
    /// Returns `false` (leaving the board untouched) if the index is out of
    /// range or the cell is already occupied.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = mark.into();
                true
            }
            _ => false,
        }
    }

    /// Clear every cell, keeping the size.
    pub fn clear(&mut self) {
        self.cells.fill(CellValue::Empty);
    }

    /// Indices of all empty cells, ascending.
    #[must_use]
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// True if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Line combinations for this board's size.
    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        win_combinations(self.size)
    }

    /// The mark owning a complete line, if any.
    ///
    /// Lines with no cells never count as complete.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.lines().iter().find_map(|line| self.line_owner(line))
    }

    /// True if the board is full and no line is complete.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    fn line_owner(&self, line: &[usize]) -> Option<Mark> {
        let first = self.get(*line.first()?)?.mark()?;
        line.iter()
            .all(|&i| self.get(i).and_then(|cell| cell.mark()) == Some(first))
            .then_some(first)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell.mark() {
                    Some(mark) => mark.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
