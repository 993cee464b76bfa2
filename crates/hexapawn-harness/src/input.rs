//! Loading positions and expected outcomes from files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use hexapawn_core::Board;
use hexapawn_engine::Outcome;
use tracing::debug;

use crate::error::HarnessError;

/// Origin name used in errors for positions read from stdin.
const STDIN_NAME: &str = "-";

/// Read a position from `path`, or from stdin when `path` is `None`.
pub fn read_position(path: Option<&Path>) -> Result<Board, HarnessError> {
    match path {
        Some(path) => {
            let file = fs::File::open(path).map_err(|source| HarnessError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            read_position_from(file, path)
        }
        None => read_position_from(io::stdin().lock(), Path::new(STDIN_NAME)),
    }
}

/// Read a whole position from `reader`. `origin` names the source in errors.
pub fn read_position_from<R: Read>(mut reader: R, origin: &Path) -> Result<Board, HarnessError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| HarnessError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
    debug!(origin = %origin.display(), bytes = text.len(), "read position");

    text.parse().map_err(|source| HarnessError::Grid {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read an expected outcome (`1` or `-1`) from `path`.
pub fn read_expected(path: &Path) -> Result<Outcome, HarnessError> {
    let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_expected(&text, path)
}

/// Parse an expected outcome. `origin` names the source in errors.
pub fn parse_expected(text: &str, origin: &Path) -> Result<Outcome, HarnessError> {
    text.parse().map_err(|source| HarnessError::InvalidExpected {
        path: origin.to_path_buf(),
        source,
    })
}
