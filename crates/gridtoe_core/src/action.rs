//! Move requests and the errors raised when applying them.
//!
//! A move is only a coordinate pair. It carries no board reference, so it can
//! describe a request that turns out to be out of range or already taken;
//! the board decides validity at the moment it is played.

use serde::{Deserialize, Serialize};

/// A request to place a mark at `(row, col)`, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index, top row is 0.
    pub row: i64,
    /// Column index, left column is 0.
    pub col: i64,
}

impl Move {
    /// Creates a move. Never fails; bounds are checked by the board.
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    pub fn row(&self) -> i64 {
        self.row
    }

    /// Returns the column index.
    pub fn col(&self) -> i64 {
        self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i64, i64)> for Move {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

/// Error that can occur when applying a move to a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move is out of range or targets an occupied square.
    #[display("Move {} is not playable on this board", _0)]
    Invalid(Move),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// An engine invariant failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_accepts_any_coordinates() {
        let mv = Move::new(-1, 42);
        assert_eq!(mv.row(), -1);
        assert_eq!(mv.col(), 42);
        assert_eq!(Move::from((2, 0)), Move::new(2, 0));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::Invalid(Move::new(3, 1)).to_string(),
            "Move (3, 1) is not playable on this board"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }
}
