//! Line detection for any board size.

use crate::board::Board;
use crate::cell::{CellValue, Mark};
use crate::outcome::Line;

/// Finds a row, column or diagonal held entirely by one mark.
///
/// Diagonals are scanned first, then each row followed by the column at the
/// same index. Every line is a candidate on every call.
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    let n = board.size();
    std::iter::once(Line::MainDiagonal)
        .chain(std::iter::once(Line::AntiDiagonal))
        .chain((0..n).flat_map(|i| [Line::Row(i), Line::Column(i)]))
        .find_map(|line| owner(board, line).map(|mark| (line, mark)))
}

/// The mark filling `line`, if a single one does.
fn owner(board: &Board, line: Line) -> Option<Mark> {
    let mut cells = line
        .cells(board.size())
        .into_iter()
        .map(|(row, col)| board.get(row, col).unwrap_or(CellValue::Empty));
    let first = cells.next()?.mark()?;
    cells
        .all(|cell| cell == CellValue::Mark(first))
        .then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;

    fn place(board: &mut Board, cells: &[(i64, i64)], mark: Mark) {
        for &(row, col) in cells {
            board.set_cell(Move::new(row, col), mark.into());
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(3).unwrap();
        place(&mut board, &[(0, 0), (0, 1), (0, 2)], Mark::A);
        assert_eq!(winning_line(&board), Some((Line::Row(0), Mark::A)));
    }

    #[test]
    fn test_winner_anti_diagonal_on_four() {
        let mut board = Board::new(4).unwrap();
        place(&mut board, &[(3, 0), (2, 1), (1, 2), (0, 3)], Mark::B);
        assert_eq!(winning_line(&board), Some((Line::AntiDiagonal, Mark::B)));
    }

    #[test]
    fn test_winner_last_column() {
        let mut board = Board::new(5).unwrap();
        place(&mut board, &[(0, 4), (1, 4), (2, 4), (3, 4), (4, 4)], Mark::A);
        assert_eq!(winning_line(&board), Some((Line::Column(4), Mark::A)));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new(3).unwrap();
        place(&mut board, &[(1, 0), (1, 1)], Mark::A);
        place(&mut board, &[(1, 2)], Mark::B);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_incomplete_line() {
        let mut board = Board::new(3).unwrap();
        place(&mut board, &[(0, 0), (1, 1)], Mark::A);
        assert_eq!(winning_line(&board), None);
    }
}
