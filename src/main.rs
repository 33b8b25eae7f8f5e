//! gridtoe - unified CLI
//!
//! Plays N×N tic-tac-toe in the terminal between humans and random players.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use gridtoe::cli::{Cli, Command, GameArgs};
use gridtoe::observers::{ConsoleObserver, TracingObserver};
use gridtoe::players::build_source;
use gridtoe::Orchestrator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play(args) => run_game(args),
        Command::Config(args) => print_config(args),
    }
}

/// Play one game on stdin/stdout
#[instrument(skip(args))]
fn run_game(args: GameArgs) -> Result<()> {
    let config = args.resolve().context("Invalid game configuration")?;
    info!(game = ?config.game(), "Starting game");

    let first = build_source(config.players().first());
    let second = build_source(config.players().second());
    let observer = (ConsoleObserver::new(std::io::stdout()), TracingObserver);

    let mut orchestrator = Orchestrator::new(config.game().clone(), first, second, observer)
        .context("Failed to set up game")?;
    let outcome = orchestrator.run().context("Game aborted")?;

    info!(%outcome, moves = orchestrator.game().moves_played(), "Game finished");
    Ok(())
}

/// Print the effective configuration
fn print_config(args: GameArgs) -> Result<()> {
    let config = args.resolve().context("Invalid game configuration")?;
    print!("{}", config.to_toml()?);
    Ok(())
}
