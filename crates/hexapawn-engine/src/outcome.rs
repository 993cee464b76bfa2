//! Game-theoretic value of a position.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::error::ParseOutcomeError;

/// Result of perfect play from a position, seen by the side to move.
///
/// Hexapawn has no draws, so every position is either a forced win or a
/// forced loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Integer form: `1` for a win, `-1` for a loss.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            Outcome::Win => 1,
            Outcome::Loss => -1,
        }
    }

    /// Inverse of [`value`](Self::value).
    pub const fn from_value(value: i32) -> Option<Outcome> {
        match value {
            1 => Some(Outcome::Win),
            -1 => Some(Outcome::Loss),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }
}

/// The same position seen by the other player.
impl Neg for Outcome {
    type Output = Outcome;

    #[inline]
    fn neg(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Outcome, ParseOutcomeError> {
        let trimmed = s.trim();
        trimmed
            .parse::<i32>()
            .ok()
            .and_then(Outcome::from_value)
            .ok_or_else(|| ParseOutcomeError {
                found: trimmed.to_string(),
            })
    }
}
