//! File and stream I/O around the Hexapawn solver.

pub mod batch;
pub mod error;
pub mod input;

pub use batch::{BatchReport, CaseResult, TestCase, discover_cases, run_batch};
pub use error::HarnessError;
pub use input::{parse_expected, read_expected, read_position, read_position_from};
