//! Exhaustive game-tree search for Hexapawn.

pub mod error;
pub mod outcome;
pub mod search;

pub use error::ParseOutcomeError;
pub use outcome::Outcome;
pub use search::{SearchConfig, SearchResult, Searcher, solve};
