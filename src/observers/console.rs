//! Plain-text game narration.

use gridtoe_core::{GameEvent, Move, Observer};
use std::io::Write;
use tracing::warn;

/// Writes a human-readable account of the game to any writer.
pub struct ConsoleObserver<W> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    /// Narrates to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// 1-based coordinates, matching the rendered board labels.
fn square(mv: Move) -> String {
    format!("{} {}", mv.row + 1, mv.col + 1)
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn report(&mut self, event: &GameEvent) {
        let result = match event {
            GameEvent::TurnStarted { name, .. } => writeln!(self.out, "Player {} makes play", name),
            GameEvent::MoveRejected { mv, .. } => {
                writeln!(self.out, "Square {} is not available, try again", square(*mv))
            }
            GameEvent::MovePlayed {
                evicted: Some(old), ..
            } => writeln!(self.out, "Oldest mark at {} fades away", square(*old)),
            GameEvent::MovePlayed { .. } => Ok(()),
            GameEvent::BoardChanged(board) => writeln!(self.out, "{}", board),
            GameEvent::Draw => writeln!(self.out, "Nobody wins"),
            GameEvent::Won { name, line, .. } => {
                writeln!(self.out, "Player {} wins on {}", name, line)
            }
        };
        if let Err(e) = result.and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to write game narration");
        }
    }
}
