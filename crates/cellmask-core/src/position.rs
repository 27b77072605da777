//! Board position (row, column) coordinates.

use std::fmt;

/// A cell position on the 9x9 board.
///
/// Rows and columns are numbered 0-8 from the top-left corner. The 3x3
/// blocks are numbered 0-8 left to right, top to bottom, so the block of a
/// position is `row / 3 * 3 + col / 3`.
///
/// # Examples
///
/// ```
/// use cellmask_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.block(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index (0-8) of the 3x3 block containing this position.
    #[must_use]
    pub const fn block(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Returns an iterator over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_cell_index)
    }

    /// Position for a row-major cell index (0-80).
    pub(crate) const fn from_cell_index(index: u8) -> Self {
        Self::new(index / 9, index % 9)
    }

    pub(crate) const fn row_index(self) -> usize {
        self.row as usize
    }

    pub(crate) const fn col_index(self) -> usize {
        self.col as usize
    }

    pub(crate) const fn block_index(self) -> usize {
        self.block() as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
