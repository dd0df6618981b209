//! Console tic-tac-toe with a heuristic computer opponent.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Console, ResultsLog};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr with ANSI off so the board stays legible.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!(results = %cli.results.display(), "starting noughts");

    let log = ResultsLog::new(cli.results);
    let mut console = Console::stdio();
    noughts::run(&mut console, &log)
}
