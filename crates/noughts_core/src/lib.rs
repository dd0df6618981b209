//! Pure tic-tac-toe game logic.
//!
//! This crate owns the rules of the game and nothing else: board and turn
//! state, win/draw detection, move validation, and the heuristic move
//! advisor that drives the computer opponent. There is no I/O here; the
//! console front end lives in the `noughts` crate and feeds moves in
//! through [`GameState::apply_move`].
//!
//! # Architecture
//!
//! - **Rules engine** ([`GameState`], [`check_winner`], [`is_full`]):
//!   applies one move at a time, computes the resulting [`GameStatus`]
//!   atomically, and rejects anything invalid without touching the board.
//! - **Move advisor** ([`choose_move`]): a fixed-priority heuristic
//!   (win > block > center > corner > any open square) evaluated on a
//!   cloned board snapshot. Deterministic and intentionally beatable.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod advisor;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use advisor::{NoLegalMoves, choose_for, choose_move};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full};
pub use types::{Board, GameState, GameStatus, Player, Square};

/// Alias for clarity where `Player` would read as a seat rather than a symbol.
pub type Mark = Player;
