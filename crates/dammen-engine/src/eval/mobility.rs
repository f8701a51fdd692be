//! Mobility: the difference in generated move counts.

use dammen_core::{Board, Color};

use crate::rules::Rules;

/// Count of generated moves for `perspective` minus the opponent's.
///
/// Counts every quiet move and every capture route reported by `rules`,
/// without applying the mandatory-capture restriction.
pub fn mobility(board: &Board, perspective: Color, rules: &dyn Rules) -> f64 {
    let ours = rules.move_count(board, perspective) as f64;
    let theirs = rules.move_count(board, perspective.flip()) as f64;
    ours - theirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StandardRules;
    use dammen_core::{Cell, Piece, sq};

    #[test]
    fn starting_position_is_zero() {
        let board = Board::starting_position();
        assert_eq!(mobility(&board, Color::Red, &StandardRules), 0.0);
    }

    #[test]
    fn king_is_more_mobile_than_man() {
        let mut board = Board::empty();
        board.set(sq(5, 4), Cell::Occupied(Piece::RED_KING));
        board.set(sq(0, 1), Cell::Occupied(Piece::BLACK_MAN));
        // 17 king slides against two man steps.
        assert_eq!(mobility(&board, Color::Red, &StandardRules), 17.0 - 2.0);
    }
}
