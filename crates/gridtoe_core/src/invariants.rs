//! Invariants re-checked after every turn in debug builds.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and document what the engine guarantees.

use crate::cell::{CellValue, PlayerSlot};
use crate::game::Game;
use strum::IntoEnumIterator;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the first player has as many marks as the second, or one more.
///
/// Holds under both variants since windows are equal for both players.
pub struct AlternatingMarks;

impl Invariant<Game> for AlternatingMarks {
    fn holds(game: &Game) -> bool {
        let a = game.board().count(CellValue::MARK_A);
        let b = game.board().count(CellValue::MARK_B);
        let valid = a == b || a == b + 1;
        if !valid {
            warn!(a, b, "Mark counts out of step");
        }
        valid
    }

    fn description() -> &'static str {
        "First player's mark count equals or leads the second's by one"
    }
}

/// Invariant: each player's marks on the board are exactly their window.
///
/// Trivially true for classic games, which keep no history.
pub struct WindowRespected;

impl WindowRespected {
    fn slot_holds(game: &Game, slot: PlayerSlot) -> bool {
        let Some(history) = game.history(slot) else {
            return true;
        };
        let mark: CellValue = slot.mark().into();
        let within = history.len() <= history.window();
        let on_board = history.iter().all(|&mv| game.board().cell(mv) == Some(mark));
        let no_strays = game.board().count(mark) == history.len();
        if !(within && on_board && no_strays) {
            warn!(?slot, within, on_board, no_strays, "Window invariant broken");
        }
        within && on_board && no_strays
    }
}

impl Invariant<Game> for WindowRespected {
    fn holds(game: &Game) -> bool {
        PlayerSlot::iter().all(|slot| Self::slot_holds(game, slot))
    }

    fn description() -> &'static str {
        "Each player's marks match their bounded history"
    }
}

/// Invariants checked after every turn.
pub type EngineInvariants = (AlternatingMarks, WindowRespected);
