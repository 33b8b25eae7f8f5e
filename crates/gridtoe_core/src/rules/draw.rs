//! Full-board detection.

use crate::board::Board;
use crate::cell::CellValue;

/// Checks if every square is occupied.
///
/// A full board is only a draw when no line is complete.
pub fn is_full(board: &Board) -> bool {
    board.count(CellValue::Empty) == 0
}
