//! gridtoe library - terminal play for N×N tic-tac-toe
//!
//! The rules live in [`gridtoe_core`]; this crate supplies the parts that
//! touch the outside world.
//!
//! # Architecture
//!
//! - **Orchestrator**: drives a game between two move sources
//! - **Players**: human text input and seeded random choice
//! - **Observers**: console narration and tracing records
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```
//! use gridtoe::{GameConfig, NullObserver, Orchestrator};
//! use gridtoe::players::RandomSource;
//!
//! let mut orchestrator = Orchestrator::new(
//!     GameConfig::bounded(3, 2),
//!     Box::new(RandomSource::new("left", Some(1))),
//!     Box::new(RandomSource::new("right", Some(2))),
//!     NullObserver,
//! )?;
//! for _ in 0..20 {
//!     if orchestrator.step()?.is_some() {
//!         break;
//!     }
//! }
//! # Ok::<(), gridtoe::OrchestratorError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app_config;
pub mod cli;
pub mod observers;
mod orchestrator;
pub mod players;

// Crate-level exports - configuration
pub use app_config::{AppConfig, PlayerKind, PlayerSpec, PlayersConfig};

// Crate-level exports - orchestration
pub use orchestrator::{Orchestrator, OrchestratorError};

// Crate-level exports - game types
pub use gridtoe_core::{
    Board, BoardError, BoardView, CellValue, ConfigError, Game, GameConfig, GameEvent,
    GameOutcome, Line, Mark, Move, MoveError, MoveHistory, MoveSource, NullObserver, Observer,
    Outcome, PlayerSlot, RecordingObserver, RetryPolicy, ScriptedSource, SetupError, SourceError,
    Turn, TurnState, Variant,
};
