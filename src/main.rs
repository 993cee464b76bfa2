//! Hexapawn solver CLI.
//!
//! - `hexapawn [POSITION]`: solve a position file (stdin when omitted) and
//!   print `1` or `-1`
//! - `hexapawn --batch DIR`: check every `.in` file in `DIR` against its
//!   expected outcome
//! - `hexapawn --perft DEPTH [POSITION]`: print per-move leaf counts
//!
//! Diagnostics go to stderr; set `RUST_LOG` to change the level.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hexapawn_core::perft::divide;
use hexapawn_engine::{SearchConfig, Searcher};
use hexapawn_harness::{read_position, run_batch};

#[derive(Parser)]
#[command(name = "hexapawn")]
#[command(about = "Exhaustive Hexapawn solver")]
struct Cli {
    /// Position file; reads stdin when omitted
    position: Option<PathBuf>,

    /// Run every case in a directory of `.in`/expected-output pairs
    #[arg(long, value_name = "DIR", conflicts_with_all = ["position", "perft"])]
    batch: Option<PathBuf>,

    /// Print a per-move perft breakdown instead of solving
    #[arg(long, value_name = "DEPTH")]
    perft: Option<usize>,

    /// Log every apply and undo during the search
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let config = SearchConfig { trace: cli.trace };

    if let Some(dir) = &cli.batch {
        let report = run_batch(dir, &config)?;
        for result in report.results() {
            let status = if result.passed() { "ok" } else { "FAILED" };
            eprintln!(
                "{}: expected {}, got {} ({:?}) {status}",
                result.case.name, result.expected, result.search.outcome, result.elapsed
            );
        }
        let failed = report.failures().count();
        if failed > 0 {
            bail!("{failed} of {} cases failed", report.len());
        }
        return Ok(());
    }

    let mut board = read_position(cli.position.as_deref())?;

    if let Some(depth) = cli.perft {
        let mut total = 0;
        for (mv, count) in divide(&mut board, depth) {
            println!("{mv}: {count}");
            total += count;
        }
        println!("total: {total}");
        return Ok(());
    }

    let result = Searcher::with_config(config).solve(&mut board);
    info!(
        outcome = %result.outcome,
        nodes = result.nodes,
        max_ply = result.max_ply,
        "solved"
    );
    println!("{}", result.outcome);
    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins; otherwise `--trace`
/// turns on search tracing and the default is warnings only.
fn init_tracing(trace: bool) {
    let default = if trace { "warn,hexapawn_engine=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
