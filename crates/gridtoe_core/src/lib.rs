//! Pure game logic for N×N tic-tac-toe.
//!
//! # Architecture
//!
//! - **Board**: square grid of [`CellValue`]s with validation and evaluation
//! - **Move**: inert `(row, col)` request, checked against a board when played
//! - **Game**: turn state machine, classic or with a per-player sliding window
//! - **MoveSource** / **Observer**: the capabilities a driver plugs in
//!
//! No I/O happens here; text input, randomness and printing live with the
//! callers.
//!
//! # Example
//!
//! ```
//! use gridtoe_core::{Game, GameConfig, Move, PlayerSlot};
//!
//! let mut game = Game::new(GameConfig::classic(3))?;
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.play(Move::new(row, col))?;
//! }
//! assert_eq!(game.outcome().and_then(|o| o.winner()), Some(PlayerSlot::First));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod config;
mod game;
mod history;
pub mod invariants;
mod observer;
mod outcome;
pub mod rules;
mod source;

pub use action::{Move, MoveError};
pub use board::{Board, BoardError, BoardView};
pub use cell::{CellValue, Mark, PlayerSlot};
pub use config::{ConfigError, GameConfig, RetryPolicy, Variant};
pub use game::{Game, SetupError, Turn, TurnState};
pub use history::MoveHistory;
pub use observer::{GameEvent, NullObserver, Observer, RecordingObserver};
pub use outcome::{GameOutcome, Line, Outcome};
pub use source::{MoveSource, ScriptedSource, SourceError};
