//! Grid coordinates.

use std::fmt;

/// A cell on the grid, addressed by row (from the top) and column (from the left).
///
/// Ordering is row-major, which is the order piece lists are kept in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position from a row and column.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    /// Return the row (0 is the top row).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Return the column (0 is the leftmost column).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the row-major index of this position on a grid `cols` wide.
    #[inline]
    pub const fn index(self, cols: u8) -> usize {
        self.row as usize * cols as usize + self.col as usize
    }

    /// Step by `(d_row, d_col)`, returning `None` if the result leaves a
    /// `rows` x `cols` grid.
    pub fn offset(self, d_row: i8, d_col: i8, rows: u8, cols: u8) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        if row < rows && col < cols {
            Some(Position { row, col })
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
