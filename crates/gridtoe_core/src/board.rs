//! N×N board storage, validation and evaluation.

use crate::action::Move;
use crate::cell::{CellValue, Mark};
use crate::outcome::{GameOutcome, Line};
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error raised when constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Board size must be at least 1.
    #[display("Invalid board size {}: must be at least 1", _0)]
    InvalidSize(usize),
}

impl std::error::Error for BoardError {}

/// Square grid of cells, fixed size for its whole life.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<CellValue>,
}

impl Board {
    /// Creates an empty `n`×`n` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `n` is zero.
    #[instrument]
    pub fn new(n: usize) -> Result<Self, BoardError> {
        if n < 1 {
            return Err(BoardError::InvalidSize(n));
        }
        Ok(Self {
            size: n,
            cells: vec![CellValue::Empty; n * n],
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at `(row, col)`, or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<CellValue> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Gets the cell a move targets, or `None` if the move is out of range.
    pub fn cell(&self, mv: Move) -> Option<CellValue> {
        self.index_of(mv).map(|idx| self.cells[idx])
    }

    /// Returns true iff the move is in range and targets an empty square.
    ///
    /// Out-of-range and occupied targets are not distinguished.
    pub fn is_valid_move(&self, mv: Move) -> bool {
        matches!(self.cell(mv), Some(CellValue::Empty))
    }

    /// Writes `value` into the targeted square without any validation.
    ///
    /// Callers check [`Board::is_valid_move`] first.
    ///
    /// # Panics
    ///
    /// Panics if the move lies outside the board.
    pub fn set_cell(&mut self, mv: Move, value: CellValue) {
        let Some(idx) = self.index_of(mv) else {
            panic!("set_cell target {} outside {}x{} board", mv, self.size, self.size);
        };
        self.cells[idx] = value;
    }

    /// Evaluates the board from its current contents.
    ///
    /// A completed line wins even when the same placement filled the last
    /// empty square.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn evaluate(&self) -> GameOutcome {
        rules::evaluate(self)
    }

    /// Returns the first completed line and the mark occupying it.
    pub fn winning_line(&self) -> Option<(Line, Mark)> {
        rules::winning_line(self)
    }

    /// Returns true if no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of squares holding `value`.
    pub fn count(&self, value: CellValue) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// All empty squares as moves, row by row.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(idx, _)| Move::new((idx / self.size) as i64, (idx % self.size) as i64))
            .collect()
    }

    /// Read-only view for move sources.
    pub fn view(&self) -> BoardView<'_> {
        BoardView { board: self }
    }

    fn index_of(&self, mv: Move) -> Option<usize> {
        let n = self.size as i64;
        if (0..n).contains(&mv.row) && (0..n).contains(&mv.col) {
            Some((mv.row * n + mv.col) as usize)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "*")?;
        for col in 0..self.size {
            write!(f, " {}", col + 1)?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{}", row + 1)?;
            for col in 0..self.size {
                write!(f, " {}", self.cells[row * self.size + col].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Read-only window onto a board: size and cell contents, no mutation.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl BoardView<'_> {
    /// Side length.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Gets the cell at `(row, col)`, or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<CellValue> {
        self.board.get(row, col)
    }

    /// Same check the game applies before accepting a move.
    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.board.is_valid_move(mv)
    }

    /// All empty squares as moves, row by row.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.board.empty_cells()
    }
}

impl std::fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.board.fmt(f)
    }
}
