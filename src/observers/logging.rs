//! Observer that turns game events into tracing records.

use gridtoe_core::{GameEvent, Observer};
use tracing::{debug, info};

/// Emits every event as a structured log record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn report(&mut self, event: &GameEvent) {
        match event {
            GameEvent::TurnStarted { player, name } => {
                debug!(?player, %name, "Turn started");
            }
            GameEvent::MoveRejected { player, mv } => {
                info!(?player, %mv, "Move rejected");
            }
            GameEvent::MovePlayed {
                player,
                mv,
                evicted,
            } => {
                info!(?player, %mv, ?evicted, "Move played");
            }
            GameEvent::BoardChanged(board) => {
                debug!(board = %board, "Board changed");
            }
            GameEvent::Draw => info!("Game drawn"),
            GameEvent::Won { player, name, line } => {
                info!(?player, %name, %line, "Game won");
            }
        }
    }
}
