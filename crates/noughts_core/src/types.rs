//! Core domain types for tic-tac-toe.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their console number as a move hint.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            if row > 0 {
                out.push_str("---+---+---\n");
            }
            for col in 0..3 {
                let idx = row * 3 + col;
                if col > 0 {
                    out.push('|');
                }
                let symbol = match self.squares[idx] {
                    Square::Empty => (b'1' + idx as u8) as char,
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                out.push(' ');
                out.push(symbol);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state for one round.
///
/// Created empty with X to move, mutated one square at a time through
/// [`GameState::apply_move`], and discarded when the driver starts the
/// next round. Once the status leaves [`GameStatus::InProgress`] the
/// board is frozen: further moves fail with [`MoveError::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move.
    to_move: Player,
    /// Game status.
    status: GameStatus,
    /// Move history (positions played, in order).
    history: Vec<Position>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the mover's mark at `pos` and advances the state machine.
    ///
    /// The resulting status is computed for the mark that just played,
    /// before the turn flips, so callers never need to reason about
    /// whose win to check after a move. The turn only flips while the
    /// game stays in progress. Nothing is mutated on failure.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round already ended.
    /// - [`MoveError::SquareOccupied`] if `pos` is not empty.
    #[instrument(skip(self), fields(mover = %self.to_move, position = %pos))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mover = self.to_move;
        self.board.set(pos, Square::Occupied(mover));
        self.history.push(pos);

        self.status = self.evaluate();
        if self.status == GameStatus::InProgress {
            self.to_move = mover.opponent();
        } else {
            debug!(status = ?self.status, "round reached terminal status");
        }

        Ok(())
    }

    /// Validates and applies a first-class [`Move`].
    ///
    /// # Errors
    ///
    /// [`MoveError::WrongPlayer`] when the move names the player not to
    /// move, plus everything [`GameState::apply_move`] can return.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        if mv.player() != self.to_move {
            return Err(MoveError::WrongPlayer(mv.player()));
        }
        self.apply_move(mv.position())
    }

    /// Replays a move sequence from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] the sequence produces.
    pub fn replay(moves: &[Move]) -> Result<GameState, MoveError> {
        let mut state = GameState::new();
        for mv in moves {
            state.apply(*mv)?;
        }
        Ok(state)
    }

    /// Recomputes the status from the board contents alone.
    ///
    /// Pure function of the board: a win belongs to whichever mark holds
    /// a completed line, independent of whose turn it is.
    pub fn evaluate(&self) -> GameStatus {
        if let Some(winner) = rules::check_winner(&self.board) {
            GameStatus::Won(winner)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
