//! Application configuration loaded from TOML.
//!
//! ```toml
//! [game]
//! size = 4
//! variant = { kind = "bounded_memory", window = 3 }
//! retries = { limited = 5 }
//!
//! [players.first]
//! kind = "human"
//! name = "Ann"
//!
//! [players.second]
//! kind = "random"
//! name = "Dice"
//! seed = 7
//! ```

use derive_getters::Getters;
use gridtoe_core::{ConfigError, GameConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How a player chooses moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    /// Types coordinates on stdin.
    Human,
    /// Picks a free square at random.
    Random,
}

/// One seat's player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct PlayerSpec {
    /// Kind of move source.
    kind: PlayerKind,

    /// Name shown in prompts and results.
    name: String,

    /// Seed for random players; ignored for humans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

impl PlayerSpec {
    /// Replaces the kind.
    pub fn set_kind(&mut self, kind: PlayerKind) {
        self.kind = kind;
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the seed.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }
}

/// Both seats.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayersConfig {
    /// Moves first with `X`.
    #[serde(default = "default_first")]
    first: PlayerSpec,

    /// Moves second with `O`.
    #[serde(default = "default_second")]
    second: PlayerSpec,
}

fn default_first() -> PlayerSpec {
    PlayerSpec::new(PlayerKind::Human, "Player 1".to_string(), None)
}

fn default_second() -> PlayerSpec {
    PlayerSpec::new(PlayerKind::Random, "Player 2".to_string(), None)
}

impl PlayersConfig {
    /// Mutable access to the first seat.
    pub fn first_mut(&mut self) -> &mut PlayerSpec {
        &mut self.first
    }

    /// Mutable access to the second seat.
    pub fn second_mut(&mut self) -> &mut PlayerSpec {
        &mut self.second
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            first: default_first(),
            second: default_second(),
        }
    }
}

/// Everything needed to set up a match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board and rule settings.
    #[serde(default)]
    game: GameConfig,

    /// Who sits in each seat.
    #[serde(default)]
    players: PlayersConfig,
}

impl AppConfig {
    /// Creates a configuration from parts.
    pub fn new(game: GameConfig, players: PlayersConfig) -> Self {
        Self { game, players }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(size = config.game.size(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.game.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }

    /// Replaces the game settings.
    pub fn set_game(&mut self, game: GameConfig) {
        self.game = game;
    }

    /// Mutable access to the player settings.
    pub fn players_mut(&mut self) -> &mut PlayersConfig {
        &mut self.players
    }
}
