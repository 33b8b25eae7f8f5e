//! Turn state machine for classic and sliding-window games.
//!
//! A game starts awaiting the first player's move. Each accepted move is
//! written to the board; under the sliding-window variant the mover's oldest
//! mark is cleared once their window overflows, and only then is the board
//! evaluated. An ongoing board hands the turn to the other player, anything
//! else finishes the game with the mover as winner or with a draw.

use crate::action::{Move, MoveError};
use crate::board::{Board, BoardError, BoardView};
use crate::cell::{CellValue, Mark, PlayerSlot};
use crate::config::{ConfigError, GameConfig, Variant};
use crate::history::MoveHistory;
use crate::outcome::{GameOutcome, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the game stands between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for `player` to place `mark`.
    AwaitingMove {
        /// Seat to move.
        player: PlayerSlot,
        /// Mark that seat places.
        mark: Mark,
    },
    /// No further moves are accepted.
    Finished(Outcome),
}

/// Record of one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Seat that moved.
    pub player: PlayerSlot,
    /// Mark that was placed.
    pub mark: Mark,
    /// Square that was filled.
    pub mv: Move,
    /// Square cleared by the sliding window this turn.
    pub evicted: Option<Move>,
    /// Board evaluation after the move and any eviction.
    pub outcome: GameOutcome,
}

/// Error raised when a game cannot be set up.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum SetupError {
    /// Board could not be built.
    #[display("{}", _0)]
    Board(BoardError),
    /// Rule settings are unusable.
    #[display("{}", _0)]
    Config(ConfigError),
}

impl std::error::Error for SetupError {}

/// A single game: one board, whose turn it is, and per-player windows under
/// the sliding-window variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    /// One history per seat, indexed by [`PlayerSlot::index`]. Classic games
    /// keep none.
    histories: Option<[MoveHistory; 2]>,
    state: TurnState,
    moves_played: usize,
}

impl Game {
    /// Creates a game awaiting the first player's move.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Board`] for a zero-sized board and
    /// [`SetupError::Config`] for a zero-length memory window.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        let board = Board::new(*config.size())?;
        config.validate()?;
        let histories = config
            .variant()
            .window()
            .map(|window| [MoveHistory::new(window), MoveHistory::new(window)]);
        info!(size = board.size(), variant = ?config.variant(), "New game");
        Ok(Self {
            config,
            board,
            histories,
            state: TurnState::AwaitingMove {
                player: PlayerSlot::First,
                mark: Mark::A,
            },
            moves_played: 0,
        })
    }

    /// Plays a move for the seat to move.
    ///
    /// The move is checked against the board first; a rejected move leaves
    /// the game untouched so the caller can ask again.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has finished.
    /// - [`MoveError::Invalid`] if the move is out of range or occupied.
    /// - [`MoveError::InvariantViolation`] in debug builds if the engine
    ///   reached an inconsistent state.
    #[instrument(skip(self), fields(turn = self.moves_played + 1))]
    pub fn play(&mut self, mv: Move) -> Result<Turn, MoveError> {
        let (player, mark) = match self.state {
            TurnState::AwaitingMove { player, mark } => (player, mark),
            TurnState::Finished(_) => return Err(MoveError::GameOver),
        };

        if !self.board.is_valid_move(mv) {
            debug!(?player, "Rejecting unplayable move");
            return Err(MoveError::Invalid(mv));
        }

        self.board.set_cell(mv, mark.into());
        self.moves_played += 1;

        // Eviction must land before evaluation
        let evicted = self.record(player, mv);

        let outcome = self.board.evaluate();
        self.state = match outcome {
            GameOutcome::Ongoing => TurnState::AwaitingMove {
                player: player.other(),
                mark: mark.opponent(),
            },
            GameOutcome::Draw => {
                info!(moves = self.moves_played, "Game drawn");
                TurnState::Finished(Outcome::Draw)
            }
            GameOutcome::Win => TurnState::Finished(self.winner(player, mark)?),
        };

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(Turn {
            player,
            mark,
            mv,
            evicted,
            outcome,
        })
    }

    /// Pushes the move onto the mover's window and clears the evicted square.
    fn record(&mut self, player: PlayerSlot, mv: Move) -> Option<Move> {
        let history = &mut self.histories.as_mut()?[player.index()];
        let evicted = history.push(mv)?;
        debug!(?player, %evicted, "Window full, clearing oldest mark");
        self.board.set_cell(evicted, CellValue::Empty);
        Some(evicted)
    }

    /// Builds the winning outcome for the seat that just moved.
    fn winner(&self, player: PlayerSlot, mark: Mark) -> Result<Outcome, MoveError> {
        let (line, owner) = self.board.winning_line().ok_or_else(|| {
            MoveError::InvariantViolation("board reported a win without a line".to_string())
        })?;
        if owner != mark {
            warn!(?owner, ?mark, "Winning line not held by the mover");
        }
        info!(?player, %line, moves = self.moves_played, "Game won");
        Ok(Outcome::Winner {
            slot: player,
            mark: owner,
            line,
        })
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), MoveError> {
        use crate::invariants::{EngineInvariants, InvariantSet};

        EngineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Read-only view handed to move sources.
    pub fn view(&self) -> BoardView<'_> {
        self.board.view()
    }

    /// Returns the configuration this game was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the rule variant.
    pub fn variant(&self) -> Variant {
        *self.config.variant()
    }

    /// Returns the current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Seat to move, or `None` once finished.
    pub fn to_move(&self) -> Option<PlayerSlot> {
        match self.state {
            TurnState::AwaitingMove { player, .. } => Some(player),
            TurnState::Finished(_) => None,
        }
    }

    /// Final outcome, or `None` while play continues.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            TurnState::AwaitingMove { .. } => None,
            TurnState::Finished(outcome) => Some(outcome),
        }
    }

    /// Returns true once the game has finished.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, TurnState::Finished(_))
    }

    /// A seat's sliding window. `None` for classic games.
    pub fn history(&self, slot: PlayerSlot) -> Option<&MoveHistory> {
        self.histories.as_ref().map(|h| &h[slot.index()])
    }

    /// Number of accepted moves so far.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Line;

    fn play_all(game: &mut Game, moves: &[(i64, i64)]) -> Vec<Turn> {
        moves
            .iter()
            .map(|&mv| game.play(Move::from(mv)).expect("legal move"))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let game = Game::new(GameConfig::classic(3)).unwrap();
        assert_eq!(
            game.state(),
            TurnState::AwaitingMove {
                player: PlayerSlot::First,
                mark: Mark::A
            }
        );
        assert!(game.history(PlayerSlot::First).is_none());
        assert_eq!(game.board().evaluate(), GameOutcome::Ongoing);
    }

    #[test]
    fn test_zero_size_fails() {
        assert!(matches!(
            Game::new(GameConfig::classic(0)),
            Err(SetupError::Board(BoardError::InvalidSize(0)))
        ));
        assert!(matches!(
            Game::new(GameConfig::bounded(3, 0)),
            Err(SetupError::Config(_))
        ));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(GameConfig::classic(3)).unwrap();
        let turn = game.play(Move::new(1, 1)).unwrap();
        assert_eq!(turn.player, PlayerSlot::First);
        assert_eq!(turn.mark, Mark::A);
        assert_eq!(game.to_move(), Some(PlayerSlot::Second));

        let turn = game.play(Move::new(0, 0)).unwrap();
        assert_eq!(turn.mark, Mark::B);
        assert_eq!(game.board().get(0, 0), Some(CellValue::MARK_B));
        assert_eq!(game.to_move(), Some(PlayerSlot::First));
    }

    #[test]
    fn test_invalid_move_leaves_state() {
        let mut game = Game::new(GameConfig::classic(3)).unwrap();
        game.play(Move::new(1, 1)).unwrap();
        let before = game.clone();

        assert_eq!(
            game.play(Move::new(1, 1)),
            Err(MoveError::Invalid(Move::new(1, 1)))
        );
        assert_eq!(
            game.play(Move::new(-1, 0)),
            Err(MoveError::Invalid(Move::new(-1, 0)))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_reports_mover() {
        let mut game = Game::new(GameConfig::classic(3)).unwrap();
        let turns = play_all(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(turns.last().unwrap().outcome, GameOutcome::Win);
        assert_eq!(
            game.outcome(),
            Some(Outcome::Winner {
                slot: PlayerSlot::First,
                mark: Mark::A,
                line: Line::Row(0)
            })
        );
        assert_eq!(game.to_move(), None);
        assert_eq!(game.play(Move::new(2, 0)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_second_player_can_win() {
        let mut game = Game::new(GameConfig::classic(3)).unwrap();
        play_all(&mut game, &[(0, 0), (0, 2), (1, 0), (1, 1), (2, 2), (2, 0)]);
        assert_eq!(
            game.outcome(),
            Some(Outcome::Winner {
                slot: PlayerSlot::Second,
                mark: Mark::B,
                line: Line::AntiDiagonal
            })
        );
    }

    #[test]
    fn test_one_by_one_board_won_immediately() {
        let mut game = Game::new(GameConfig::classic(1)).unwrap();
        let turn = game.play(Move::new(0, 0)).unwrap();
        assert_eq!(turn.outcome, GameOutcome::Win);
        assert_eq!(game.outcome().and_then(|o| o.winner()), Some(PlayerSlot::First));
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut game = Game::new(GameConfig::bounded(3, 2)).unwrap();
        let turns = play_all(&mut game, &[(0, 0), (2, 2), (1, 0), (2, 1), (0, 2)]);

        let last = turns.last().unwrap();
        assert_eq!(last.evicted, Some(Move::new(0, 0)));
        assert_eq!(game.board().get(0, 0), Some(CellValue::Empty));
        assert_eq!(game.board().count(CellValue::MARK_A), 2);
        let kept: Vec<_> = game.history(PlayerSlot::First).unwrap().iter().copied().collect();
        assert_eq!(kept, vec![Move::new(1, 0), Move::new(0, 2)]);
    }

    #[test]
    fn test_eviction_cancels_pending_win() {
        // Player 1's third top-row mark pushes the first one out
        let mut game = Game::new(GameConfig::bounded(3, 2)).unwrap();
        let turns = play_all(&mut game, &[(0, 0), (2, 2), (0, 1), (2, 0), (0, 2)]);

        let last = turns.last().unwrap();
        assert_eq!(last.evicted, Some(Move::new(0, 0)));
        assert_eq!(last.outcome, GameOutcome::Ongoing);
        assert!(!game.is_finished());
    }

    #[test]
    fn test_evicted_square_is_playable_again() {
        let mut game = Game::new(GameConfig::bounded(3, 1)).unwrap();
        play_all(&mut game, &[(0, 0), (2, 2), (1, 1)]);
        assert!(game.view().is_valid_move(Move::new(0, 0)));
        let turn = game.play(Move::new(0, 0)).unwrap();
        assert_eq!(turn.evicted, Some(Move::new(2, 2)));
        assert_eq!(game.board().get(2, 2), Some(CellValue::Empty));
    }

    #[test]
    fn test_classic_keeps_every_mark() {
        let mut game = Game::new(GameConfig::classic(4)).unwrap();
        let turns = play_all(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (3, 0)]);
        assert!(turns.iter().all(|t| t.evicted.is_none()));
        assert_eq!(game.board().count(CellValue::MARK_A), 3);
        assert_eq!(game.moves_played(), 5);
    }
}
