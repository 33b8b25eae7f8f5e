//! Game events and the observers that receive them.
//!
//! Observers are passive: nothing they do feeds back into the game, so a
//! game plays identically with [`NullObserver`] attached.

use crate::action::Move;
use crate::board::Board;
use crate::cell::PlayerSlot;
use crate::outcome::Line;
use serde::{Deserialize, Serialize};

/// Something worth reporting during a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player is about to be asked for a move.
    TurnStarted {
        /// Seat to move.
        player: PlayerSlot,
        /// Display name of that player.
        name: String,
    },
    /// A move source offered a move the board rejected.
    MoveRejected {
        /// Seat that offered it.
        player: PlayerSlot,
        /// The rejected move.
        mv: Move,
    },
    /// A move was applied.
    MovePlayed {
        /// Seat that moved.
        player: PlayerSlot,
        /// Square filled.
        mv: Move,
        /// Square cleared by the sliding window, if any.
        evicted: Option<Move>,
    },
    /// Board after the latest move.
    BoardChanged(Board),
    /// Game ended without a winner.
    Draw,
    /// Game ended with a winner.
    Won {
        /// Winning seat.
        player: PlayerSlot,
        /// Display name of the winner.
        name: String,
        /// Completed line.
        line: Line,
    },
}

/// Receives game events.
pub trait Observer {
    /// Handles one event.
    fn report(&mut self, event: &GameEvent);
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn report(&mut self, _event: &GameEvent) {}
}

/// Observer that keeps every event, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Vec<GameEvent>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events seen so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

impl Observer for RecordingObserver {
    fn report(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn report(&mut self, event: &GameEvent) {
        (**self).report(event)
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn report(&mut self, event: &GameEvent) {
        (**self).report(event)
    }
}

impl<A: Observer, B: Observer> Observer for (A, B) {
    fn report(&mut self, event: &GameEvent) {
        self.0.report(event);
        self.1.report(event);
    }
}
