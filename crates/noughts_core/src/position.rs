//! Board positions and their console numbering.

use crate::action::MoveError;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the 3x3 board, in row-major order.
///
/// Positions carry two namings: the variant name used throughout the code,
/// and the 1-9 numbering shown at the console (`number = index + 1`, so
/// `row = (number - 1) / 3` and `col = (number - 1) % 3`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (number 1)
    TopLeft,
    /// Top-center (number 2)
    TopCenter,
    /// Top-right (number 3)
    TopRight,
    /// Middle-left (number 4)
    MiddleLeft,
    /// Center (number 5)
    Center,
    /// Middle-right (number 6)
    MiddleRight,
    /// Bottom-left (number 7)
    BottomLeft,
    /// Bottom-center (number 8)
    BottomCenter,
    /// Bottom-right (number 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending numeric order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners, in ascending numeric order (1, 3, 7, 9).
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The 1-9 console number for this position.
    pub fn number(self) -> u8 {
        self.to_index() as u8 + 1
    }

    /// Parses a raw 1-9 console number.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::PositionOutOfRange`] for anything outside 1-9.
    #[instrument]
    pub fn from_number(number: u8) -> Result<Self, MoveError> {
        match number {
            1..=9 => Ok(Self::ALL[usize::from(number - 1)]),
            _ => Err(MoveError::PositionOutOfRange(number)),
        }
    }

    /// Filters positions by board state - returns only empty squares,
    /// in ascending numeric order.
    #[instrument(skip(board))]
    pub fn open_squares(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
