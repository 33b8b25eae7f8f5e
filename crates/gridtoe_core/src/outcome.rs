//! Board evaluation results and final game outcomes.

use crate::cell::{Mark, PlayerSlot};
use serde::{Deserialize, Serialize};

/// Classification of a board's contents, recomputed on demand.
///
/// `Win` does not name the winner; the game infers it from whose turn just
/// completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Play continues.
    Ongoing,
    /// Every square is filled and no line is complete.
    Draw,
    /// Some row, column or diagonal holds a single mark.
    Win,
}

impl GameOutcome {
    /// Returns true for `Draw` and `Win`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

/// A full-length line through the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Cells `(i, i)`.
    MainDiagonal,
    /// Cells `(n - 1 - i, i)`.
    AntiDiagonal,
    /// Every cell of one row.
    Row(usize),
    /// Every cell of one column.
    Column(usize),
}

impl Line {
    /// Coordinates covered by this line on an `n`-sized board.
    pub fn cells(self, n: usize) -> Vec<(usize, usize)> {
        (0..n)
            .map(|i| match self {
                Line::MainDiagonal => (i, i),
                Line::AntiDiagonal => (n - 1 - i, i),
                Line::Row(row) => (row, i),
                Line::Column(col) => (i, col),
            })
            .collect()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::MainDiagonal => write!(f, "main diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
            Line::Row(row) => write!(f, "row {}", row + 1),
            Line::Column(col) => write!(f, "column {}", col + 1),
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player who moved last completed a line.
    Winner {
        /// Seat of the winning player.
        slot: PlayerSlot,
        /// Mark occupying the winning line.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winning seat if there is one.
    pub fn winner(&self) -> Option<PlayerSlot> {
        match self {
            Outcome::Winner { slot, .. } => Some(*slot),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { slot, mark, line } => {
                write!(f, "{} ({}) wins on {}", slot, mark, line)
            }
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
