//! Engine configuration: board size, rule variant and retry policy.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Rule variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Variant {
    /// Marks stay on the board for the whole game.
    #[default]
    Classic,
    /// Each player keeps at most `window` marks; placing one more clears
    /// that player's oldest mark.
    BoundedMemory {
        /// Maximum marks per player.
        window: usize,
    },
}

impl Variant {
    /// The per-player window, if this variant has one.
    pub fn window(self) -> Option<usize> {
        match self {
            Variant::Classic => None,
            Variant::BoundedMemory { window } => Some(window),
        }
    }
}

/// How many times a move source is asked again after offering an
/// unplayable move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Keep asking forever. A source that never produces a legal move
    /// blocks the game.
    #[default]
    Unbounded,
    /// Ask again after at most this many rejected moves in a single turn;
    /// the next rejection ends the game. `Limited(0)` allows no retries.
    Limited(u32),
}

impl RetryPolicy {
    /// Returns true if another attempt is allowed after `rejected` rejections.
    pub fn allows(self, rejected: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Limited(max) => rejected <= max,
        }
    }
}

/// Settings for a single game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_size")]
    size: usize,

    /// Rule variant.
    #[serde(default)]
    variant: Variant,

    /// Retry policy for rejected moves.
    #[serde(default)]
    retries: RetryPolicy,
}

fn default_size() -> usize {
    3
}

impl GameConfig {
    /// Creates a configuration with an unbounded retry policy.
    pub fn new(size: usize, variant: Variant) -> Self {
        Self {
            size,
            variant,
            retries: RetryPolicy::default(),
        }
    }

    /// Classic rules on an `size`×`size` board.
    pub fn classic(size: usize) -> Self {
        Self::new(size, Variant::Classic)
    }

    /// Sliding-window rules on an `size`×`size` board.
    pub fn bounded(size: usize, window: usize) -> Self {
        Self::new(size, Variant::BoundedMemory { window })
    }

    /// Replaces the retry policy.
    pub fn with_retries(mut self, retries: RetryPolicy) -> Self {
        self.retries = retries;
        self
    }

    /// Checks that the board size and window are usable.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 1 {
            warn!(size = self.size, "Rejecting board size");
            return Err(ConfigError::new(format!(
                "board size must be at least 1, got {}",
                self.size
            )));
        }
        if let Variant::BoundedMemory { window } = self.variant
            && window < 1
        {
            warn!(window, "Rejecting memory window");
            return Err(ConfigError::new(format!(
                "memory window must be at least 1, got {}",
                window
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic(default_size())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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
