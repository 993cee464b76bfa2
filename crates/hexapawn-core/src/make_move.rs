//! In-place move application and exact undo.
//!
//! Moves must be undone in the reverse order they were applied. The board
//! does not record history; debug builds assert the obvious preconditions.

use crate::board::Board;
use crate::pawn_move::Move;

impl Board {
    /// Play `mv` for the side to move, mutating the board in place.
    ///
    /// Returns `true` if the pawn landed on the mover's home rank, which
    /// wins the game for the mover.
    #[must_use = "reaching the home rank ends the game"]
    pub fn apply_move(&mut self, mv: Move) -> bool {
        let us = self.side_to_move();
        let them = !us;
        debug_assert_eq!(self.color_on(mv.source()), Some(us), "no pawn to move for {mv}");
        debug_assert_eq!(
            self.color_on(mv.dest()),
            mv.is_capture().then_some(them),
            "destination does not match capture flag for {mv}"
        );

        if mv.is_capture() {
            self.remove_piece(mv.dest(), them);
        }
        self.remove_piece(mv.source(), us);
        self.place_piece(mv.dest(), us);
        self.set_side_to_move(them);

        mv.dest().row() == us.home_row(self.rows())
    }

    /// Revert `mv`, which must be the most recently applied move.
    pub fn undo_move(&mut self, mv: Move) {
        let us = !self.side_to_move();
        self.set_side_to_move(us);
        debug_assert_eq!(self.color_on(mv.dest()), Some(us), "{mv} was not the last move");
        debug_assert!(self.cell(mv.source()).is_empty(), "{mv} source is occupied");

        self.remove_piece(mv.dest(), us);
        self.place_piece(mv.source(), us);
        if mv.is_capture() {
            self.place_piece(mv.dest(), !us);
        }
    }
}
