//! Console tic-tac-toe with a heuristic computer opponent.
//!
//! This crate is the I/O shell around [`noughts_core`]: it renders the
//! board, runs the menu and input loops, decides which seat is human and
//! which is the computer, and appends each round's outcome to an
//! append-only results log.
//!
//! # Architecture
//!
//! - **Console** ([`Console`]): line-oriented input/output over any
//!   `BufRead`/`Write` pair (stdin/stdout in the binary, buffers in tests).
//! - **Players** ([`Player`], [`HumanPlayer`], [`ComputerPlayer`]): the
//!   seam between the round driver and where moves come from.
//! - **Round driver** ([`play_round`]): applies moves through the rules
//!   engine and re-prompts on rejected input.
//! - **Results log** ([`ResultsLog`]): one line per finished round.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod console;
mod menu;
mod players;
mod results;
mod round;

pub use app::run;
pub use cli::Cli;
pub use console::Console;
pub use menu::MenuChoice;
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use results::{LogError, Outcome, ResultsLog, Tally};
pub use round::play_round;
