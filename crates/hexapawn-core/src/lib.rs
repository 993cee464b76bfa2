//! Core Hexapawn types: board representation, move generation, and game rules.

mod board;
mod cell;
mod color;
mod error;
mod grid;
mod make_move;
mod pawn_move;
mod position;

pub mod movegen;
pub mod perft;

pub use board::Board;
pub use cell::Cell;
pub use color::Color;
pub use error::{BoardError, GridError};
pub use grid::STARTING_GRID;
pub use movegen::{MoveList, generate_legal_moves, generate_moves};
pub use pawn_move::Move;
pub use position::Position;
