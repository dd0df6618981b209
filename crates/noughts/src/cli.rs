//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Console tic-tac-toe with a heuristic computer opponent.
///
/// Gameplay is driven entirely through the interactive menu; the flags
/// here only configure where things land on disk.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Console tic-tac-toe with a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path of the append-only results log.
    #[arg(long, default_value = "results.txt")]
    pub results: PathBuf,
}
