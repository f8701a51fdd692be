//! Static exchange check for quiet root moves.
//!
//! A quiet move is simulated and the opponent's capture routes are scanned
//! for a hop that jumps the moved piece. Such a move scores the negative
//! value of the moved piece; any other scores zero.

use dammen_core::{Board, Color, Move, Square};

use crate::rules::Rules;
use crate::search::apply::crown;
use crate::search::legal::generate;

/// Exchange score of moving the piece on `from` to `to`.
pub fn quiet_exchange_score(
    board: &Board,
    side: Color,
    from: Square,
    to: Square,
    rules: &dyn Rules,
) -> f64 {
    let Some(piece) = board.piece_at(from) else {
        return 0.0;
    };
    let mut after = rules.apply_quiet(board, from, to);
    crown(&mut after, to, rules);

    let replies = generate(&after, side.flip(), rules).captures;
    let hangs = replies.iter().filter_map(Move::route).any(|route| {
        route.path().windows(2).any(|hop| {
            let mut occupied = hop[0]
                .between(hop[1])
                .into_iter()
                .filter(|&s| !after.is_empty(s));
            occupied.next() == Some(to) && occupied.next().is_none()
        })
    });
    if hangs { -piece.value() } else { 0.0 }
}

/// Drop quiet moves whose exchange score is below `margin`.
///
/// Captures are kept. If every move would be dropped, `moves` is returned
/// unchanged.
pub fn filter_hanging(
    board: &Board,
    side: Color,
    moves: Vec<Move>,
    margin: f64,
    rules: &dyn Rules,
) -> Vec<Move> {
    let safe: Vec<Move> = moves
        .iter()
        .filter(|mv| match mv {
            Move::Quiet { from, to } => {
                quiet_exchange_score(board, side, *from, *to, rules) >= margin
            }
            Move::Capture(_) => true,
        })
        .cloned()
        .collect();
    if safe.is_empty() { moves } else { safe }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StandardRules;
    use dammen_core::{Cell, Piece, sq};

    fn board_with(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(s, p) in pieces {
            board.set(s, Cell::Occupied(p));
        }
        board
    }

    fn quiet(from: Square, to: Square) -> Move {
        Move::Quiet { from, to }
    }

    #[test]
    fn hanging_move_scores_negative_piece_value() {
        // Red man (6,3) stepping to (5,4) can be jumped by the black man on (4,5).
        let board = board_with(&[(sq(6, 3), Piece::RED_MAN), (sq(3, 6), Piece::BLACK_MAN)]);
        assert_eq!(
            quiet_exchange_score(&board, Color::Red, sq(6, 3), sq(5, 2), &StandardRules),
            0.0
        );
        let board = board_with(&[(sq(6, 3), Piece::RED_MAN), (sq(4, 5), Piece::BLACK_MAN)]);
        assert_eq!(
            quiet_exchange_score(&board, Color::Red, sq(6, 3), sq(5, 4), &StandardRules),
            -1.0
        );
    }

    #[test]
    fn king_value_at_stake() {
        let board = board_with(&[(sq(6, 3), Piece::RED_KING), (sq(2, 7), Piece::BLACK_KING)]);
        assert_eq!(
            quiet_exchange_score(&board, Color::Red, sq(6, 3), sq(5, 4), &StandardRules),
            -1.5
        );
    }

    #[test]
    fn filter_keeps_safe_moves() {
        let board = board_with(&[(sq(6, 3), Piece::RED_MAN), (sq(4, 5), Piece::BLACK_MAN)]);
        let moves = vec![quiet(sq(6, 3), sq(5, 4)), quiet(sq(6, 3), sq(5, 2))];
        let kept = filter_hanging(&board, Color::Red, moves, -0.08, &StandardRules);
        assert_eq!(kept, vec![quiet(sq(6, 3), sq(5, 2))]);
    }

    #[test]
    fn filter_never_empties_the_set() {
        let board = board_with(&[(sq(6, 3), Piece::RED_MAN), (sq(4, 5), Piece::BLACK_MAN)]);
        let moves = vec![quiet(sq(6, 3), sq(5, 4))];
        let kept = filter_hanging(&board, Color::Red, moves.clone(), -0.08, &StandardRules);
        assert_eq!(kept, moves);
    }

    #[test]
    fn margin_below_piece_value_keeps_everything() {
        let board = board_with(&[(sq(6, 3), Piece::RED_MAN), (sq(4, 5), Piece::BLACK_MAN)]);
        let moves = vec![quiet(sq(6, 3), sq(5, 4)), quiet(sq(6, 3), sq(5, 2))];
        let kept = filter_hanging(&board, Color::Red, moves.clone(), -2.0, &StandardRules);
        assert_eq!(kept, moves);
    }
}
