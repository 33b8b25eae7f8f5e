//! Per-player sliding window of placed marks.

use crate::action::Move;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::instrument;

/// Bounded, oldest-first record of one player's marks still on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    window: usize,
    moves: VecDeque<Move>,
}

impl MoveHistory {
    /// Creates an empty history holding at most `window` moves.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            moves: VecDeque::with_capacity(window + 1),
        }
    }

    /// Appends a move and returns the evicted oldest move if the window
    /// would otherwise be exceeded.
    #[instrument(skip(self), fields(window = self.window, len = self.moves.len()))]
    pub fn push(&mut self, mv: Move) -> Option<Move> {
        self.moves.push_back(mv);
        if self.moves.len() > self.window {
            self.moves.pop_front()
        } else {
            None
        }
    }

    /// Maximum number of moves kept.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of moves currently kept.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no moves are kept.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The move that will be evicted next.
    pub fn oldest(&self) -> Option<Move> {
        self.moves.front().copied()
    }

    /// Kept moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}
