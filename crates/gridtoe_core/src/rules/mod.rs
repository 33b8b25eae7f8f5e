//! Board evaluation rules.
//!
//! Pure functions over a [`Board`]. Win detection and the full-board check
//! are kept apart so the precedence between them lives in one place.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::board::Board;
use crate::outcome::GameOutcome;

/// Classifies the board. A completed line outranks a full board.
pub fn evaluate(board: &Board) -> GameOutcome {
    if winning_line(board).is_some() {
        GameOutcome::Win
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::cell::CellValue;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len()).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let value = match ch {
                    'X' => CellValue::MARK_A,
                    'O' => CellValue::MARK_B,
                    _ => CellValue::Empty,
                };
                board.set_cell(Move::new(r as i64, c as i64), value);
            }
        }
        board
    }

    #[test]
    fn test_win_beats_full_board() {
        // Last placement fills the board and completes the top row
        let board = board_from(&["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), GameOutcome::Win);
    }

    #[test]
    fn test_classic_draw() {
        let board = board_from(&["XOX", "XOO", "OXX"]);
        assert_eq!(evaluate(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_partial_board_ongoing() {
        let board = board_from(&["XO.", "...", "..."]);
        assert_eq!(evaluate(&board), GameOutcome::Ongoing);
    }

    #[test]
    fn test_single_cell_board() {
        let board = board_from(&["."]);
        assert_eq!(evaluate(&board), GameOutcome::Ongoing);
        let board = board_from(&["O"]);
        assert_eq!(evaluate(&board), GameOutcome::Win);
    }
}
