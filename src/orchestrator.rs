//! Game orchestration between two move sources.

use gridtoe_core::{
    Game, GameConfig, GameEvent, MoveError, MoveSource, Observer, Outcome, PlayerSlot,
    SetupError, SourceError, Turn,
};
use tracing::{debug, info, instrument, warn};

/// Errors that stop a match.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum OrchestratorError {
    /// The game could not be created.
    #[display("{}", _0)]
    #[from]
    Setup(SetupError),

    /// A move source failed to produce a move.
    #[display("{}", _0)]
    #[from]
    Source(SourceError),

    /// The game refused a move for a reason other than a bad square.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),

    /// A source kept offering unplayable moves past the retry limit.
    #[display("{} ({}) gave up after {} rejected moves", name, player, attempts)]
    RetriesExhausted {
        /// Seat whose source failed.
        player: PlayerSlot,
        /// Display name of that source.
        name: String,
        /// Rejected moves in the final turn.
        attempts: u32,
    },
}

impl std::error::Error for OrchestratorError {}

/// Drives one game: asks the active source for moves, applies them and
/// reports what happens to the observer.
pub struct Orchestrator<O = Box<dyn Observer>> {
    game: Game,
    players: [Box<dyn MoveSource>; 2],
    observer: O,
}

impl<O: Observer> Orchestrator<O> {
    /// Creates an orchestrator for a fresh game.
    #[instrument(skip(first, second, observer), fields(first = first.name(), second = second.name()))]
    pub fn new(
        config: GameConfig,
        first: Box<dyn MoveSource>,
        second: Box<dyn MoveSource>,
        observer: O,
    ) -> Result<Self, OrchestratorError> {
        Ok(Self {
            game: Game::new(config)?,
            players: [first, second],
            observer,
        })
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Display name of the source in `slot`.
    pub fn name(&self, slot: PlayerSlot) -> &str {
        self.players[slot.index()].name()
    }

    /// Runs the game loop to completion.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, OrchestratorError> {
        info!("Starting game orchestration");

        loop {
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Plays a single turn. Returns the outcome once the game has finished.
    #[instrument(skip(self), fields(turn = self.game.moves_played() + 1))]
    pub fn step(&mut self) -> Result<Option<Outcome>, OrchestratorError> {
        let player = self.game.to_move().ok_or(MoveError::GameOver)?;
        let name = self.name(player).to_string();

        self.observer.report(&GameEvent::TurnStarted {
            player,
            name: name.clone(),
        });

        let turn = self.acquire(player, &name)?;

        self.observer.report(&GameEvent::MovePlayed {
            player,
            mv: turn.mv,
            evicted: turn.evicted,
        });
        self.observer
            .report(&GameEvent::BoardChanged(self.game.board().clone()));

        let outcome = self.game.outcome();
        match outcome {
            Some(Outcome::Draw) => {
                info!("Game over: draw");
                self.observer.report(&GameEvent::Draw);
            }
            Some(Outcome::Winner { slot, line, .. }) => {
                info!(winner = %name, %line, "Game over: win");
                self.observer.report(&GameEvent::Won {
                    player: slot,
                    name: self.name(slot).to_string(),
                    line,
                });
            }
            None => {}
        }
        Ok(outcome)
    }

    /// Asks `player` for moves until one is accepted or the retry policy
    /// runs out.
    fn acquire(&mut self, player: PlayerSlot, name: &str) -> Result<Turn, OrchestratorError> {
        let retries = *self.game.config().retries();
        let mut rejected = 0u32;

        loop {
            debug!(player = %name, "Waiting for move");
            let mv = self.players[player.index()].next_move(&self.game.view())?;

            match self.game.play(mv) {
                Ok(turn) => return Ok(turn),
                Err(MoveError::Invalid(mv)) => {
                    rejected += 1;
                    warn!(player = %name, %mv, rejected, "Move rejected, asking again");
                    self.observer.report(&GameEvent::MoveRejected { player, mv });
                    if !retries.allows(rejected) {
                        return Err(OrchestratorError::RetriesExhausted {
                            player,
                            name: name.to_string(),
                            attempts: rejected,
                        });
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Replaces the game with a fresh one using the same configuration.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), OrchestratorError> {
        self.game = Game::new(self.game.config().clone())?;
        Ok(())
    }
}
