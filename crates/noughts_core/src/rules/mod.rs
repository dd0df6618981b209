//! Game rules for tic-tac-toe.
//!
//! Pure predicates over board contents. Rules are separated from board
//! storage so the advisor can evaluate hypothetical boards with the
//! same code paths the rules engine uses.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
