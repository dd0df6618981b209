//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use noughts_core::{GameState, Position};
use std::io::{BufRead, Write};

use crate::console::Console;

/// A seat at the board: something that can choose the next move.
///
/// The round driver asks whichever implementation holds the mark to
/// move; the console is passed through so human seats can prompt and
/// the computer seat can announce itself.
pub trait Player<R: BufRead, W: Write> {
    /// Chooses the next move for the current state.
    fn choose(&mut self, state: &GameState, console: &mut Console<R, W>) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
