//! Round driver: one game from empty board to terminal status.

use anyhow::{Result, bail};
use noughts_core::{GameState, GameStatus, Mark, MoveError};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

use crate::console::Console;
use crate::players::Player;
use crate::results::Outcome;

/// Plays one round to completion and returns its outcome.
///
/// The driver owns the single [`GameState`] for the round, routes each
/// turn to the seat holding the mark to move, and applies the chosen
/// move through the rules engine. An occupied square bounces back to
/// the same seat with a message; any other rejection is a driver bug
/// and aborts the round.
#[instrument(skip_all)]
pub fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player_x: &mut dyn Player<R, W>,
    player_o: &mut dyn Player<R, W>,
) -> Result<Outcome> {
    let mut state = GameState::new();
    debug!(x = player_x.name(), o = player_o.name(), "round started");

    loop {
        console.show_board(state.board())?;

        match state.status() {
            GameStatus::Won(mark) => {
                let name = match mark {
                    Mark::X => player_x.name(),
                    Mark::O => player_o.name(),
                };
                console.show_line(&format!("\nPlayer {mark} wins!"))?;
                info!(winner = %mark, player = name, moves = state.history().len(), "round won");
                return Ok(Outcome::Winner(mark));
            }
            GameStatus::Draw => {
                console.show_line("\nGame Draw")?;
                info!(moves = state.history().len(), "round drawn");
                return Ok(Outcome::Draw);
            }
            GameStatus::InProgress => {}
        }

        let mover = state.to_move();
        let player: &mut dyn Player<R, W> = match mover {
            Mark::X => &mut *player_x,
            Mark::O => &mut *player_o,
        };

        let position = player.choose(&state, console)?;
        match state.apply_move(position) {
            Ok(()) => {}
            Err(MoveError::SquareOccupied(_)) => {
                console.show_line("Position already occupied! Choose another position.")?;
            }
            Err(err) => bail!("move rejected by rules engine: {err}"),
        }
    }
}
