//! Cell occupancy.

use crate::color::Color;

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
}

impl Cell {
    /// Return the cell holding a pawn of `color`.
    #[inline]
    pub const fn pawn(color: Color) -> Cell {
        match color {
            Color::White => Cell::White,
            Color::Black => Cell::Black,
        }
    }

    /// Return the color of the pawn in this cell, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Color::White),
            Cell::Black => Some(Color::Black),
        }
    }

    /// Return the same cell with the pawn's color swapped.
    #[inline]
    pub const fn flip(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::White => Cell::Black,
            Cell::Black => Cell::White,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Parse a grid marker: `P` (White), `p` (Black) or `.` (empty).
    pub const fn from_char(c: char) -> Option<Cell> {
        match c {
            'P' => Some(Cell::White),
            'p' => Some(Cell::Black),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }

    /// Return the grid marker for this cell.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::White => 'P',
            Cell::Black => 'p',
        }
    }
}
