//! The rules seam between the search and a move generator.

use dammen_core::{Board, Cell, Color, Square, piece_moves};

use crate::error::RulesError;

/// Raw generator output for one square.
///
/// Capture paths are reported as the generator produced them: they may or
/// may not start with the origin and may repeat squares. The search
/// normalises them before use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedMoves {
    pub captures: Vec<Vec<Square>>,
    pub quiet: Vec<Square>,
}

/// Helper bundle the search calls into for everything rule-specific.
pub trait Rules {
    /// Classify a cell by color. Empty cells and ghosts have none.
    fn color_of(&self, cell: Cell) -> Option<Color> {
        cell.color()
    }

    /// Generate the capture paths and quiet destinations of the piece on `from`.
    fn moves_from(&self, board: &Board, from: Square) -> GeneratedMoves;

    /// Return a new board with the piece on `from` moved to `to`.
    fn apply_quiet(&self, board: &Board, from: Square, to: Square) -> Board {
        let mut next = *board;
        next.relocate(from, to);
        next
    }

    /// Crown the piece on `sq` if it stands on its promotion row.
    fn crown_if_needed(&self, board: &mut Board, sq: Square) -> Result<(), RulesError> {
        if board.piece_at(sq).is_none() {
            return Err(RulesError::EmptySquare { square: sq });
        }
        board.crown_if_needed(sq);
        Ok(())
    }

    /// Total number of generated moves (captures and quiet) for `side`.
    fn move_count(&self, board: &Board, side: Color) -> usize {
        board
            .pieces()
            .filter(|&(sq, _)| self.color_of(board.get(sq)) == Some(side))
            .map(|(sq, _)| {
                let moves = self.moves_from(board, sq);
                moves.captures.len() + moves.quiet.len()
            })
            .sum()
    }
}

/// Rules backed by the built-in man and flying-king generators.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl Rules for StandardRules {
    fn moves_from(&self, board: &Board, from: Square) -> GeneratedMoves {
        let moves = piece_moves(board, from);
        GeneratedMoves {
            captures: moves
                .captures
                .iter()
                .map(|route| route.path().to_vec())
                .collect(),
            quiet: moves.quiet,
        }
    }
}
