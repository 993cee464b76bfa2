//! Error types for position parsing and board validation.

use crate::position::Position;

/// Errors that occur when reading a position from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The input has no turn line at all.
    #[error("missing turn indicator")]
    MissingTurn,

    /// The turn line is not `W` or `B`.
    #[error("invalid turn indicator: \"{found}\"")]
    InvalidTurn {
        /// The offending line.
        found: String,
    },

    /// There are no rows, or the first row has no cells.
    #[error("grid has no cells")]
    EmptyGrid,

    /// A row's width differs from the first row's.
    #[error("row {row} has {length} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        length: usize,
        /// Width of the first row.
        expected: usize,
    },

    /// A cell marker is not `P`, `p` or `.`.
    #[error("invalid cell marker '{character}' at row {row}, column {col}")]
    InvalidCell {
        row: usize,
        col: usize,
        character: char,
    },

    /// The grid does not fit in 255 rows by 255 columns.
    #[error("grid of {rows}x{cols} is too large")]
    TooLarge { rows: usize, cols: usize },

    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A piece list holds a position outside the grid.
    #[error("piece at {position} is outside the grid")]
    OutOfBounds { position: Position },

    /// A position appears more than once across the piece lists.
    #[error("more than one piece at {position}")]
    DuplicatePiece { position: Position },

    /// The cell grid disagrees with the piece lists.
    #[error("cell at {position} is inconsistent with the piece lists")]
    InconsistentCell { position: Position },
}
