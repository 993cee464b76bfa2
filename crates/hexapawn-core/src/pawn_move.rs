//! Pawn move representation.

use std::fmt;

use crate::position::Position;

/// A single ply: a pawn moving from `source` to `dest`.
///
/// `capture` is set iff `dest` held an opposing pawn when the move was
/// generated. Straight advances never capture and diagonal steps always do.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Position,
    dest: Position,
    capture: bool,
}

impl Move {
    /// Create a straight advance into an empty cell.
    pub const fn new(source: Position, dest: Position) -> Move {
        Move {
            source,
            dest,
            capture: false,
        }
    }

    /// Create a diagonal capture.
    pub const fn new_capture(source: Position, dest: Position) -> Move {
        Move {
            source,
            dest,
            capture: true,
        }
    }

    #[inline]
    pub const fn source(self) -> Position {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Position {
        self.dest
    }

    /// Return `true` if this move removes an opposing pawn.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.capture
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.source, sep, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
