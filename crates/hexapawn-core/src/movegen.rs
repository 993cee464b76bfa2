//! Pawn move generation.

use crate::board::Board;
use crate::color::Color;
use crate::pawn_move::Move;
use crate::position::Position;

/// Ordered buffer of generated moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList { moves: Vec::new() }
    }

    /// Create an empty move list with room for `capacity` moves.
    pub fn with_capacity(capacity: usize) -> MoveList {
        MoveList {
            moves: Vec::with_capacity(capacity),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return the moves as a slice, in generation order.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Iterate over the moves in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Return `true` if `mv` is in the list.
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Column steps tried for every pawn, in order: capture left, advance, capture right.
const STEPS: [(i8, bool); 3] = [(-1, true), (0, false), (1, true)];

/// Generate every move available to the side to move.
pub fn generate_legal_moves(board: &Board) -> MoveList {
    generate_moves(board, board.side_to_move())
}

/// Generate every move available to `color`, regardless of whose turn it is.
///
/// Pawns are visited in row-major order, and each pawn tries capture-left,
/// advance, then capture-right, so the output order is reproducible.
pub fn generate_moves(board: &Board, color: Color) -> MoveList {
    let pawns = board.pieces(color);
    let mut list = MoveList::with_capacity(pawns.len() * STEPS.len());
    for &source in pawns {
        for (d_col, capture) in STEPS {
            if let Some(mv) = pawn_step(board, color, source, d_col, capture) {
                list.push(mv);
            }
        }
    }
    list
}

/// Check a single step for the pawn of `color` on `source`.
///
/// A diagonal step is legal only onto an opposing pawn; a straight step
/// only onto an empty cell.
fn pawn_step(board: &Board, color: Color, source: Position, d_col: i8, capture: bool) -> Option<Move> {
    let dest = source.offset(color.forward(), d_col, board.rows(), board.cols())?;
    let occupant = board.color_on(dest);
    if capture {
        (occupant == Some(!color)).then(|| Move::new_capture(source, dest))
    } else {
        occupant.is_none().then(|| Move::new(source, dest))
    }
}
