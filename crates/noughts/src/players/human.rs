//! Human player reading moves from the console.

use super::Player;
use anyhow::Result;
use noughts_core::{GameState, Position};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::console::Console;

/// Human seat: prompts at the console for a 1-9 square number.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<R: BufRead, W: Write> Player<R, W> for HumanPlayer {
    fn choose(&mut self, _state: &GameState, console: &mut Console<R, W>) -> Result<Position> {
        loop {
            let number = console.prompt_move()?;
            match Position::from_number(number) {
                Ok(pos) => return Ok(pos),
                Err(err) => {
                    debug!(%err, "rejected move input");
                    console.show_line("Invalid position! Please enter a number between 1 and 9.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
