//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects: they can be validated
//! before application, serialized, and replayed in tests.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    player: Player,
    /// The position where the player places their mark.
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
///
/// All variants are recoverable: the game state is untouched and the
/// caller can re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The raw position number is outside 1-9.
    #[display("position {} is out of range (1-9)", _0)]
    PositionOutOfRange(u8),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("the game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("it is not {}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}
