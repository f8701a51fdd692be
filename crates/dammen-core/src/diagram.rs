//! Text diagrams for [`Board`]: ten rows of ten cell characters.
//!
//! `.` empty, `#` ghost, `r`/`R` red man/king, `b`/`B` black man/king.
//! Rows run from row 0 (Black's back row) to row 9 and are separated by `/`
//! or newlines.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::BoardError;
use crate::square::{SIZE, Square};

/// Diagram of the standard starting position.
pub const STARTING_DIAGRAM: &str = ".b.b.b.b.b/b.b.b.b.b./.b.b.b.b.b/b.b.b.b.b./........../........../.r.r.r.r.r/r.r.r.r.r./.r.r.r.r.r/r.r.r.r.r.";

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Board, BoardError> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != SIZE as usize {
            return Err(BoardError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != SIZE as usize {
                return Err(BoardError::BadRowLength {
                    row,
                    length: cells.len(),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                let cell = Cell::from_char(c).ok_or(BoardError::InvalidCellChar { character: c })?;
                if let Some(sq) = Square::new(row as u8, col as u8) {
                    board.set(sq, cell);
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row > 0 {
                write!(f, "/")?;
            }
            for col in 0..SIZE {
                let c = Square::new(row, col).map_or('?', |sq| self.get(sq).to_char());
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
