//! Command-line interface for gridtoe.

use crate::app_config::{AppConfig, PlayerKind};
use clap::{Args, Parser, Subcommand};
use gridtoe_core::{ConfigError, GameConfig, RetryPolicy, Variant};
use std::path::PathBuf;
use tracing::instrument;

/// gridtoe - N×N tic-tac-toe with an optional sliding-window rule
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "N-by-N tic-tac-toe for humans and random players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play(GameArgs),

    /// Print the effective configuration as TOML
    Config(GameArgs),
}

/// Game settings shared by all commands. Flags override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Keep at most this many marks per player (sliding-window rule)
    #[arg(short = 'l', long)]
    pub window: Option<usize>,

    /// Play classic rules even if the config file sets a window
    #[arg(long, conflicts_with = "window")]
    pub classic: bool,

    /// Retries allowed after a rejected move in one turn; the next rejection ends the game
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// First player kind
    #[arg(long, value_enum)]
    pub first: Option<PlayerKind>,

    /// Second player kind
    #[arg(long, value_enum)]
    pub second: Option<PlayerKind>,

    /// First player name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Second player name
    #[arg(long)]
    pub second_name: Option<String>,

    /// Seed for random players (second player uses seed + 1)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GameArgs {
    /// Loads the config file, if any, and applies flag overrides.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        let base = config.game().clone();
        let size = self.size.unwrap_or(*base.size());
        let variant = match (self.classic, self.window) {
            (true, _) => Variant::Classic,
            (false, Some(window)) => Variant::BoundedMemory { window },
            (false, None) => *base.variant(),
        };
        let retries = self
            .max_retries
            .map(RetryPolicy::Limited)
            .unwrap_or(*base.retries());
        let game = GameConfig::new(size, variant).with_retries(retries);
        game.validate()?;
        config.set_game(game);

        let players = config.players_mut();
        if let Some(kind) = self.first {
            players.first_mut().set_kind(kind);
        }
        if let Some(kind) = self.second {
            players.second_mut().set_kind(kind);
        }
        if let Some(name) = &self.first_name {
            players.first_mut().set_name(name.clone());
        }
        if let Some(name) = &self.second_name {
            players.second_mut().set_name(name.clone());
        }
        if let Some(seed) = self.seed {
            players.first_mut().set_seed(Some(seed));
            players.second_mut().set_seed(Some(seed.wrapping_add(1)));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::parse_from([
            "gridtoe", "play", "-n", "4", "-l", "3", "--first", "random", "--seed", "9",
        ]);
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        let config = args.resolve().unwrap();
        assert_eq!(*config.game().size(), 4);
        assert_eq!(*config.game().variant(), Variant::BoundedMemory { window: 3 });
        assert_eq!(*config.players().first().kind(), PlayerKind::Random);
        assert_eq!(*config.players().first().seed(), Some(9));
        assert_eq!(*config.players().second().seed(), Some(10));
    }

    #[test]
    fn test_zero_window_rejected() {
        let args = GameArgs {
            window: Some(0),
            ..GameArgs::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_classic_conflicts_with_window() {
        let result = Cli::try_parse_from(["gridtoe", "play", "--classic", "--window", "2"]);
        assert!(result.is_err());
    }
}
