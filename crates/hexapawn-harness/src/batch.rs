//! Directory-driven batch checking of solver results.
//!
//! A batch directory holds pairs of files: `<name>.in` with a position and
//! `<name>.<ext>` (any other extension, usually `.out`) with the expected
//! value, `1` or `-1`.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use hexapawn_engine::{Outcome, SearchConfig, SearchResult, Searcher};
use tracing::{info, warn};

use crate::error::HarnessError;
use crate::input::{read_expected, read_position};

/// Extension that marks a position file.
const INPUT_EXTENSION: &str = "in";

/// One position file and its expected-outcome file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Shared file stem.
    pub name: String,
    pub input: PathBuf,
    pub expected: PathBuf,
}

/// Outcome of running one [`TestCase`].
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub case: TestCase,
    pub expected: Outcome,
    pub search: SearchResult,
    /// Wall time spent in the search alone.
    pub elapsed: Duration,
}

impl CaseResult {
    /// Return `true` if the solver agreed with the expected outcome.
    pub fn passed(&self) -> bool {
        self.search.outcome == self.expected
    }
}

/// Results of a whole batch, in case order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    results: Vec<CaseResult>,
}

impl BatchReport {
    pub fn results(&self) -> &[CaseResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over the cases the solver got wrong.
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|result| !result.passed())
    }

    pub fn all_passed(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Total search time across all cases.
    pub fn total_elapsed(&self) -> Duration {
        self.results.iter().map(|result| result.elapsed).sum()
    }
}

/// Find every case in `dir`, sorted by file name.
///
/// Each `<stem>.in` file is paired with the first other file (by name)
/// sharing its stem.
pub fn discover_cases(dir: &Path) -> Result<Vec<TestCase>, HarnessError> {
    let io_error = |source: std::io::Error| HarnessError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut cases = Vec::new();
    for input in files.iter().filter(|path| is_input(path)) {
        let stem = input.file_stem();
        let expected = files
            .iter()
            .find(|path| !is_input(path) && path.file_stem() == stem)
            .ok_or_else(|| HarnessError::MissingExpected {
                input: input.clone(),
            })?;
        cases.push(TestCase {
            name: stem.unwrap_or_default().to_string_lossy().into_owned(),
            input: input.clone(),
            expected: expected.clone(),
        });
    }
    Ok(cases)
}

fn is_input(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(INPUT_EXTENSION))
}

/// Solve every case in `dir` and compare against the expected outcomes.
///
/// Mismatches are reported in the returned [`BatchReport`]; only I/O and
/// format problems are errors.
pub fn run_batch(dir: &Path, config: &SearchConfig) -> Result<BatchReport, HarnessError> {
    let cases = discover_cases(dir)?;
    info!(dir = %dir.display(), cases = cases.len(), "running batch");

    let searcher = Searcher::with_config(config.clone());
    let mut results = Vec::with_capacity(cases.len());

    for case in cases {
        let expected = read_expected(&case.expected)?;
        let mut board = read_position(Some(case.input.as_path()))?;

        let start = Instant::now();
        let search = searcher.solve(&mut board);
        let elapsed = start.elapsed();

        let result = CaseResult {
            case,
            expected,
            search,
            elapsed,
        };
        if result.passed() {
            info!(
                case = %result.case.name,
                outcome = %result.search.outcome,
                nodes = result.search.nodes,
                ?elapsed,
                "case passed"
            );
        } else {
            warn!(
                case = %result.case.name,
                expected = %result.expected,
                actual = %result.search.outcome,
                ?elapsed,
                "case failed"
            );
        }
        results.push(result);
    }

    let report = BatchReport { results };
    info!(
        cases = report.len(),
        failed = report.failures().count(),
        elapsed = ?report.total_elapsed(),
        "batch finished"
    );
    Ok(report)
}
