//! Human player that types coordinates.

use gridtoe_core::{BoardView, Move, MoveSource, SourceError};
use std::io::{BufRead, Stdin, Write};
use tracing::{debug, instrument, warn};

/// Line-at-a-time text input.
pub trait LineInput {
    /// Appends the next line to `buf`, returning the bytes read. Zero means
    /// end of input.
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize>;
}

impl<R: BufRead> LineInput for R {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Process stdin, locked only for the duration of each read so any number
/// of human players can share it.
#[derive(Debug)]
pub struct StdinReader(Stdin);

impl StdinReader {
    /// Wraps the process's stdin handle.
    pub fn new() -> Self {
        Self(std::io::stdin())
    }
}

impl Default for StdinReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput for StdinReader {
    fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
        self.0.read_line(buf)
    }
}

/// Human player reading `row col` lines, both 1-based as on the rendered
/// board.
///
/// Lines that don't parse are answered with a hint and read again. Whether
/// the square is free is left to the game, which asks again if not.
pub struct HumanSource<R, W> {
    name: String,
    input: R,
    prompt: W,
}

impl<R: LineInput, W: Write> HumanSource<R, W> {
    /// Creates a human player reading from `input` and prompting on `prompt`.
    pub fn new(name: impl Into<String>, input: R, prompt: W) -> Self {
        Self {
            name: name.into(),
            input,
            prompt,
        }
    }

    fn write_prompt(&mut self, text: &str) -> Result<(), SourceError> {
        write!(self.prompt, "{}", text)
            .and_then(|()| self.prompt.flush())
            .map_err(|e| SourceError::new(format!("Failed to write prompt: {}", e)))
    }
}

/// Parses `"row col"` (1-based) into a zero-based move.
fn parse_move(line: &str) -> Option<Move> {
    let mut parts = line.split_whitespace();
    let row: i64 = parts.next()?.parse().ok()?;
    let col: i64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(row.checked_sub(1)?, col.checked_sub(1)?))
}

impl<R: LineInput, W: Write> MoveSource for HumanSource<R, W> {
    #[instrument(skip(self, view), fields(player = %self.name))]
    fn next_move(&mut self, view: &BoardView<'_>) -> Result<Move, SourceError> {
        let n = view.size();
        loop {
            self.write_prompt(&format!("{}, enter row and column (1-{}): ", self.name, n))?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| SourceError::new(format!("Failed to read input: {}", e)))?;
            if read == 0 {
                return Err(SourceError::new(format!("Input closed for {}", self.name)));
            }

            match parse_move(&line) {
                Some(mv) => {
                    debug!(%mv, "Human move parsed");
                    return Ok(mv);
                }
                None => {
                    warn!(input = line.trim(), "Unparseable move");
                    self.write_prompt("Please type two numbers, like `2 3`.\n")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
