//! Player that picks uniformly among the free squares.

use gridtoe_core::{BoardView, Move, MoveSource, SourceError};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Uniform random player. Seeded players replay the same choices.
#[derive(Debug, Clone)]
pub struct RandomSource {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a random player, seeded for reproducible games or from OS
    /// entropy when `seed` is `None`.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl MoveSource for RandomSource {
    #[instrument(skip(self, view), fields(player = %self.name))]
    fn next_move(&mut self, view: &BoardView<'_>) -> Result<Move, SourceError> {
        let mv = view
            .empty_cells()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| SourceError::new("No free squares to choose from"))?;
        debug!(%mv, "Random move chosen");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtoe_core::{Board, CellValue};

    #[test]
    fn test_only_picks_free_squares() {
        let mut board = Board::new(2).unwrap();
        board.set_cell(Move::new(0, 0), CellValue::MARK_A);
        board.set_cell(Move::new(0, 1), CellValue::MARK_B);
        board.set_cell(Move::new(1, 0), CellValue::MARK_A);

        let mut source = RandomSource::new("dice", Some(1));
        for _ in 0..10 {
            assert_eq!(source.next_move(&board.view()).unwrap(), Move::new(1, 1));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let board = Board::new(5).unwrap();
        let mut a = RandomSource::new("a", Some(42));
        let mut b = RandomSource::new("b", Some(42));
        for _ in 0..10 {
            assert_eq!(
                a.next_move(&board.view()).unwrap(),
                b.next_move(&board.view()).unwrap()
            );
        }
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut board = Board::new(1).unwrap();
        board.set_cell(Move::new(0, 0), CellValue::MARK_A);
        let mut source = RandomSource::new("dice", Some(7));
        assert!(source.next_move(&board.view()).is_err());
    }
}
