//! Move generation for men and flying kings.

mod king;
mod man;

use crate::board::Board;
use crate::color::Color;
use crate::draughts_move::{CaptureRoute, Move};
use crate::square::Square;

use self::king::{gen_king_captures, gen_king_quiet};
use self::man::{gen_man_captures, gen_man_quiet};

/// Quiet destinations and capture routes of a single piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceMoves {
    pub quiet: Vec<Square>,
    pub captures: Vec<CaptureRoute>,
}

impl PieceMoves {
    /// Return `true` if the piece has neither a quiet move nor a capture.
    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty()
    }
}

/// Generate the quiet moves and capture routes of the piece on `from`.
///
/// An empty square or a ghost yields no moves. Quiet moves are reported
/// even when captures exist; the mandatory-capture rule is applied by
/// [`legal_moves`].
pub fn piece_moves(board: &Board, from: Square) -> PieceMoves {
    let mut moves = PieceMoves::default();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };
    if piece.is_king() {
        gen_king_quiet(board, from, &mut moves.quiet);
        gen_king_captures(board, from, piece, &mut moves.captures);
    } else {
        gen_man_quiet(board, from, piece, &mut moves.quiet);
        gen_man_captures(board, from, piece, &mut moves.captures);
    }
    moves
}

/// Generate all legal moves for `side`.
///
/// If any piece of `side` can capture, only captures are returned.
/// Pieces are visited in square order.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut captures = Vec::new();
    let mut quiet = Vec::new();
    for from in board.squares_of(side) {
        let moves = piece_moves(board, from);
        captures.extend(moves.captures.into_iter().map(Move::Capture));
        if captures.is_empty() {
            quiet.extend(moves.quiet.into_iter().map(|to| Move::Quiet { from, to }));
        }
    }
    if captures.is_empty() { quiet } else { captures }
}

/// Return `true` if `side` has at least one capture.
pub fn has_capture(board: &Board, side: Color) -> bool {
    board
        .squares_of(side)
        .any(|from| !piece_moves(board, from).captures.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::piece::Piece;
    use crate::square::sq;

    #[test]
    fn starting_position_red_has_nine_steps() {
        let board = Board::starting_position();
        let moves = legal_moves(&board, Color::Red);
        assert_eq!(moves.len(), 9);
        assert!(moves.iter().all(|m| !m.is_capture()));
        assert!(moves.iter().all(|m| m.from().row() == 6 && m.to().row() == 5));
    }

    #[test]
    fn starting_position_black_has_nine_steps() {
        let board = Board::starting_position();
        assert_eq!(legal_moves(&board, Color::Black).len(), 9);
    }

    #[test]
    fn capture_is_mandatory() {
        let mut board = Board::empty();
        board.set(sq(6, 3), Cell::Occupied(Piece::RED_MAN));
        board.set(sq(5, 4), Cell::Occupied(Piece::BLACK_MAN));
        board.set(sq(7, 2), Cell::Occupied(Piece::RED_MAN));
        board.set(sq(8, 9), Cell::Occupied(Piece::RED_KING));
        let moves = legal_moves(&board, Color::Red);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to_string(), "d4xf6");
        assert!(has_capture(&board, Color::Red));
        assert!(!has_capture(&board, Color::Black));
    }

    #[test]
    fn quiet_moves_when_no_capture() {
        let mut board = Board::empty();
        board.set(sq(9, 0), Cell::Occupied(Piece::RED_MAN));
        board.set(sq(4, 5), Cell::Occupied(Piece::RED_KING));
        let moves = legal_moves(&board, Color::Red);
        // The man on (9,0) blocks the king's long diagonal.
        assert_eq!(moves.len(), 16 + 1);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn empty_and_ghost_have_no_moves() {
        let mut board = Board::empty();
        board.set(sq(4, 5), Cell::Ghost);
        assert!(piece_moves(&board, sq(4, 5)).is_empty());
        assert!(piece_moves(&board, sq(5, 4)).is_empty());
    }
}
