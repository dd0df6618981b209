//! Computer player backed by the heuristic advisor.

use super::Player;
use anyhow::{Context, Result};
use noughts_core::{GameState, Position, choose_move};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::console::Console;

/// Computer seat: delegates to [`noughts_core::choose_move`] and
/// announces the square it picked.
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<R: BufRead, W: Write> Player<R, W> for ComputerPlayer {
    fn choose(&mut self, state: &GameState, console: &mut Console<R, W>) -> Result<Position> {
        console.show_line("Computer's turn...")?;
        let pos = choose_move(state).context("advisor invoked on a finished board")?;
        debug!(player = %self.name, position = %pos, "computer chose a square");
        console.show_line(&format!("Computer chose position {}", pos.number()))?;
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
