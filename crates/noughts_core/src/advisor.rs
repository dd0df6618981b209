//! Heuristic move selection for the computer opponent.
//!
//! The advisor is a stateless function of a board snapshot. It applies a
//! fixed priority - win now, block the opponent's win, take the center,
//! take a corner, take anything - and within each tier scans squares in
//! ascending numeric order, so the choice is fully deterministic. It is
//! not a game-tree search and can be beaten.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameState, GameStatus, Player, Square};
use tracing::{debug, instrument};

/// The advisor was asked for a move on a finished or full board.
///
/// This is a contract violation by the driver, not a game event: with an
/// in-progress game there is always at least one open square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no legal moves available")]
pub struct NoLegalMoves;

/// Chooses the move the side to move should play.
///
/// # Errors
///
/// Returns [`NoLegalMoves`] if the game is over or the board is full.
#[instrument(skip(state), fields(mover = %state.to_move()))]
pub fn choose_move(state: &GameState) -> Result<Position, NoLegalMoves> {
    if state.status() != GameStatus::InProgress {
        return Err(NoLegalMoves);
    }
    choose_for(state.board(), state.to_move())
}

/// Chooses a move for `mover` on a bare board snapshot.
///
/// # Errors
///
/// Returns [`NoLegalMoves`] if the board is full.
pub fn choose_for(board: &Board, mover: Player) -> Result<Position, NoLegalMoves> {
    // Take a win if one is available.
    if let Some(pos) = winning_square(board, mover) {
        debug!(position = %pos, "taking the winning square");
        return Ok(pos);
    }

    // Occupy the square the opponent would win with.
    if let Some(pos) = winning_square(board, mover.opponent()) {
        debug!(position = %pos, "blocking the opponent");
        return Ok(pos);
    }

    if board.is_empty(Position::Center) {
        debug!("taking the center");
        return Ok(Position::Center);
    }

    if let Some(pos) = Position::CORNERS.iter().copied().find(|&p| board.is_empty(p)) {
        debug!(position = %pos, "taking a corner");
        return Ok(pos);
    }

    Position::ALL
        .iter()
        .copied()
        .find(|&p| board.is_empty(p))
        .ok_or(NoLegalMoves)
}

/// Finds the lowest-numbered empty square that completes a line for
/// `player`, by cloning the board and placing the mark hypothetically.
fn winning_square(board: &Board, player: Player) -> Option<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .find(|&pos| {
            let mut probe = board.clone();
            probe.set(pos, Square::Occupied(player));
            rules::check_winner(&probe) == Some(player)
        })
}
