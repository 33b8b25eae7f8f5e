//! Move sources: whatever decides where a player plays.

use crate::action::Move;
use crate::board::BoardView;
use derive_more::{Display, Error};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Trait for anything that can pick a move for a player.
///
/// Sources are untrusted: the game re-checks every move it receives and asks
/// again if the move is not playable.
pub trait MoveSource {
    /// Proposes a move for the current position.
    fn next_move(&mut self, view: &BoardView<'_>) -> Result<Move, SourceError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self, view: &BoardView<'_>) -> Result<Move, SourceError> {
        (**self).next_move(view)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Failure inside a move source, such as closed input.
#[derive(Debug, Clone, Display, Error)]
#[display("Move source error: {} at {}:{}", message, file, line)]
pub struct SourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SourceError {
    /// Creates a new source error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Plays a fixed sequence of moves, then fails.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    name: String,
    moves: VecDeque<Move>,
}

impl ScriptedSource {
    /// Creates a source that replays `moves` in order.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedSource {
    #[instrument(skip(self, _view), fields(source = %self.name))]
    fn next_move(&mut self, _view: &BoardView<'_>) -> Result<Move, SourceError> {
        let mv = self
            .moves
            .pop_front()
            .ok_or_else(|| SourceError::new(format!("{} has no scripted moves left", self.name)))?;
        debug!(%mv, remaining = self.moves.len(), "Scripted move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
