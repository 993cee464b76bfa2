//! Harness errors.

use std::path::PathBuf;

use hexapawn_core::GridError;
use hexapawn_engine::ParseOutcomeError;

/// Errors that can occur while loading positions or batch cases.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// A file, directory, or stdin could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The path being read (`-` for stdin).
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A position file is malformed.
    #[error("invalid position in {}: {source}", path.display())]
    Grid {
        path: PathBuf,
        source: GridError,
    },

    /// An expected-outcome file does not hold `1` or `-1`.
    #[error("invalid expected outcome in {}: {source}", path.display())]
    InvalidExpected {
        path: PathBuf,
        source: ParseOutcomeError,
    },

    /// An input file has no expected-outcome partner.
    #[error("no expected-outcome file for {}", input.display())]
    MissingExpected {
        /// The orphaned input file.
        input: PathBuf,
    },
}
