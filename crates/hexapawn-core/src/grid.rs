//! Text format parsing and rendering for [`Board`].
//!
//! ```text
//! W        <- side to move: W or B
//! ppp      <- one line per row, top row first
//! ...         P = White pawn, p = Black pawn, . = empty
//! PPP
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::board::Board;
use crate::cell::Cell;
use crate::color::Color;
use crate::error::GridError;

/// The standard 3x3 starting position with White to move.
pub const STARTING_GRID: &str = "W\nppp\n...\nPPP";

impl Board {
    /// Build a board from a turn and a grid of cell markers, one string per row.
    pub fn from_grid<S: AsRef<str>>(side_to_move: Color, grid: &[S]) -> Result<Board, GridError> {
        let expected = grid
            .first()
            .map(|row| row.as_ref().chars().count())
            .unwrap_or(0);
        if expected == 0 {
            return Err(GridError::EmptyGrid);
        }
        if grid.len() > u8::MAX as usize || expected > u8::MAX as usize {
            return Err(GridError::TooLarge {
                rows: grid.len(),
                cols: expected,
            });
        }

        let mut cells = Vec::with_capacity(grid.len() * expected);
        for (row, line) in grid.iter().enumerate() {
            let line = line.as_ref();
            let length = line.chars().count();
            if length != expected {
                return Err(GridError::RaggedRow {
                    row,
                    length,
                    expected,
                });
            }
            for (col, character) in line.chars().enumerate() {
                let cell = Cell::from_char(character).ok_or(GridError::InvalidCell {
                    row,
                    col,
                    character,
                })?;
                cells.push(cell);
            }
        }

        let board = Board::from_cells(grid.len() as u8, expected as u8, cells, side_to_move);
        board.validate()?;
        debug!(
            rows = board.rows(),
            cols = board.cols(),
            side = %side_to_move,
            "parsed position"
        );
        Ok(board)
    }

    /// Build a board from the full text format, one item per line.
    ///
    /// Trailing whitespace on each line is ignored, as are blank lines after
    /// the last row.
    pub fn from_lines<I, S>(lines: I) -> Result<Board, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        let mut rows: Vec<&str> = lines.iter().map(|line| line.as_ref().trim_end()).collect();
        while rows.last().is_some_and(|line| line.is_empty()) {
            rows.pop();
        }

        let (turn, grid) = rows.split_first().ok_or(GridError::MissingTurn)?;
        let mut markers = turn.chars();
        let side_to_move = match (markers.next().and_then(Color::from_turn_char), markers.next()) {
            (Some(color), None) => color,
            _ => {
                return Err(GridError::InvalidTurn {
                    found: turn.to_string(),
                })
            }
        };

        Board::from_grid(side_to_move, grid)
    }

    /// Return the standard 3x3 starting position.
    pub fn starting_position() -> Board {
        Board::from_lines(STARTING_GRID.lines()).expect("starting grid is well formed")
    }
}

impl FromStr for Board {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Board, GridError> {
        Board::from_lines(s.lines())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.side_to_move())?;
        for row in self.grid_rows() {
            writeln!(f)?;
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
