//! The Hexapawn board: grid size, pawn placement, and side to move.

use std::fmt;

use crate::cell::Cell;
use crate::color::Color;
use crate::error::BoardError;
use crate::position::Position;

/// Complete Hexapawn position state.
///
/// Pawns are stored twice: once per color as a row-major sorted list, and
/// once as a dense row-major grid of [`Cell`]s. Every mutation updates both.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Number of rows, fixed for the game.
    rows: u8,
    /// Number of columns, fixed for the game.
    cols: u8,
    /// Pawn positions for each side, indexed by [`Color::index()`], kept sorted.
    pieces: [Vec<Position>; Color::COUNT],
    /// Occupancy of every cell in row-major order.
    cells: Vec<Cell>,
    /// Which side moves next.
    side_to_move: Color,
}

impl Board {
    /// Build a board from a row-major cell grid. Used by text parsing.
    ///
    /// `cells.len()` must equal `rows * cols`.
    pub(crate) fn from_cells(rows: u8, cols: u8, cells: Vec<Cell>, side_to_move: Color) -> Board {
        debug_assert_eq!(cells.len(), rows as usize * cols as usize);
        let mut pieces = [Vec::new(), Vec::new()];
        for (idx, cell) in cells.iter().enumerate() {
            if let Some(color) = cell.color() {
                pieces[color.index()].push(position_at(idx, cols));
            }
        }
        Board {
            rows,
            cols,
            pieces,
            cells,
            side_to_move,
        }
    }

    /// Return the number of rows.
    #[inline]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Return the number of columns.
    #[inline]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the pawns of `color` in row-major order.
    #[inline]
    pub fn pieces(&self, color: Color) -> &[Position] {
        &self.pieces[color.index()]
    }

    /// Return the contents of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index(self.cols)]
    }

    /// Return the color of the pawn at `pos`, if any.
    #[inline]
    pub fn color_on(&self, pos: Position) -> Option<Color> {
        self.cell(pos).color()
    }

    /// Return `true` if `pos` is inside the grid.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    /// Iterate over every row as a slice of cells, top to bottom.
    pub fn grid_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols as usize)
    }

    /// Put a pawn of `color` on the empty cell `pos`.
    #[inline]
    pub(crate) fn place_piece(&mut self, pos: Position, color: Color) {
        let list = &mut self.pieces[color.index()];
        let slot = list.binary_search(&pos);
        debug_assert!(slot.is_err(), "{color} pawn already on {pos}");
        if let Err(idx) = slot {
            list.insert(idx, pos);
        }
        self.cells[pos.index(self.cols)] = Cell::pawn(color);
    }

    /// Take the pawn of `color` off `pos`.
    #[inline]
    pub(crate) fn remove_piece(&mut self, pos: Position, color: Color) {
        let list = &mut self.pieces[color.index()];
        let slot = list.binary_search(&pos);
        debug_assert!(slot.is_ok(), "no {color} pawn on {pos}");
        if let Ok(idx) = slot {
            list.remove(idx);
        }
        self.cells[pos.index(self.cols)] = Cell::Empty;
    }

    /// Set the side to move.
    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Validate that the piece lists and the cell grid agree.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut owners: Vec<Option<Color>> = vec![None; self.cells.len()];
        for color in Color::ALL {
            for &position in self.pieces(color) {
                if !self.contains(position) {
                    return Err(BoardError::OutOfBounds { position });
                }
                let owner = &mut owners[position.index(self.cols)];
                if owner.is_some() {
                    return Err(BoardError::DuplicatePiece { position });
                }
                *owner = Some(color);
            }
        }

        for (idx, (cell, owner)) in self.cells.iter().zip(&owners).enumerate() {
            if cell.color() != *owner {
                return Err(BoardError::InconsistentCell {
                    position: position_at(idx, self.cols),
                });
            }
        }

        Ok(())
    }

    /// Return the color-swapped position: rows reversed, pawn colors
    /// swapped, and the other side to move.
    ///
    /// A position and its mirror always have the same game-theoretic value.
    pub fn mirrored(&self) -> Board {
        let mut cells = vec![Cell::Empty; self.cells.len()];
        for (row, cells_in_row) in self.grid_rows().enumerate() {
            let target_row = self.rows as usize - 1 - row;
            let start = target_row * self.cols as usize;
            for (col, cell) in cells_in_row.iter().enumerate() {
                cells[start + col] = cell.flip();
            }
        }
        Board::from_cells(self.rows, self.cols, cells, !self.side_to_move)
    }
}

/// Convert a row-major index back to a position on a grid `cols` wide.
fn position_at(idx: usize, cols: u8) -> Position {
    let cols = cols as usize;
    Position::new((idx / cols) as u8, (idx % cols) as u8)
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.to_string())
    }
}
