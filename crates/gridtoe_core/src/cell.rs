//! Cell contents, marks and player slots.

use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Mark {
    /// First player's mark, rendered `X`.
    A,
    /// Second player's mark, rendered `O`.
    B,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::A => Mark::B,
            Mark::B => Mark::A,
        }
    }

    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::A => 'X',
            Mark::B => 'O',
        }
    }

    /// The player slot that owns this mark.
    pub fn slot(self) -> PlayerSlot {
        match self {
            Mark::A => PlayerSlot::First,
            Mark::B => PlayerSlot::Second,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellValue {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square holds a player's mark.
    Mark(Mark),
}

impl CellValue {
    /// Square holding the first player's mark.
    pub const MARK_A: CellValue = CellValue::Mark(Mark::A);
    /// Square holding the second player's mark.
    pub const MARK_B: CellValue = CellValue::Mark(Mark::B);

    /// Returns true if nothing is placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            CellValue::Empty => None,
            CellValue::Mark(mark) => Some(mark),
        }
    }

    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            CellValue::Empty => '*',
            CellValue::Mark(mark) => mark.symbol(),
        }
    }
}

impl From<Mark> for CellValue {
    fn from(mark: Mark) -> Self {
        CellValue::Mark(mark)
    }
}

/// Seat at the table. The first player always holds [`Mark::A`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum PlayerSlot {
    /// Moves first, plays [`Mark::A`].
    First,
    /// Moves second, plays [`Mark::B`].
    Second,
}

impl PlayerSlot {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::First => PlayerSlot::Second,
            PlayerSlot::Second => PlayerSlot::First,
        }
    }

    /// The mark this seat plays.
    pub fn mark(self) -> Mark {
        match self {
            PlayerSlot::First => Mark::A,
            PlayerSlot::Second => Mark::B,
        }
    }

    /// Array index for per-player storage.
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::First => 0,
            PlayerSlot::Second => 1,
        }
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSlot::First => write!(f, "player 1"),
            PlayerSlot::Second => write!(f, "player 2"),
        }
    }
}
