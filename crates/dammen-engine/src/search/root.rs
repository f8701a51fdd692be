//! Root candidate selection.
//!
//! Root captures are narrowed before the search: only routes winning the
//! most material survive, king attackers are preferred over men, and
//! promoting routes are preferred over the rest. Quiet roots go through the
//! static exchange filter instead.

use dammen_core::{Board, Color, Move};

use crate::rules::Rules;
use crate::search::legal::generate;
use crate::search::ordering::{CaptureStats, capture_stats};
use crate::search::see::filter_hanging;

/// Narrow a list of root captures to the preferred routes.
pub fn tie_break(board: &Board, captures: Vec<Move>, rules: &dyn Rules) -> Vec<Move> {
    let mut decorated: Vec<(CaptureStats, Move)> = captures
        .into_iter()
        .filter_map(|mv| {
            let stats = capture_stats(board, mv.route()?.path(), rules);
            Some((stats, mv))
        })
        .collect();

    let best = decorated
        .iter()
        .map(|(s, _)| s.victim_sum)
        .fold(f64::NEG_INFINITY, f64::max);
    decorated.retain(|(s, _)| s.victim_sum == best);

    if decorated.iter().any(|(s, _)| s.king_attacker()) {
        decorated.retain(|(s, _)| s.king_attacker());
    }
    if decorated.iter().any(|(s, _)| s.promotes) {
        decorated.retain(|(s, _)| s.promotes);
    }
    decorated.into_iter().map(|(_, mv)| mv).collect()
}

/// The moves the root searches for `side`, before ordering.
///
/// Captures are tie-broken; quiet moves are filtered by static exchange
/// when `see_margin` is given.
pub fn root_candidates(
    board: &Board,
    side: Color,
    see_margin: Option<f64>,
    rules: &dyn Rules,
) -> Vec<Move> {
    let generated = generate(board, side, rules);
    if generated.has_captures() {
        return tie_break(board, generated.captures, rules);
    }
    match see_margin {
        Some(margin) => filter_hanging(board, side, generated.quiet, margin, rules),
        None => generated.quiet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StandardRules;
    use dammen_core::{Cell, Piece, Square, sq};

    fn board_with(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(s, p) in pieces {
            board.set(s, Cell::Occupied(p));
        }
        board
    }

    #[test]
    fn larger_haul_wins() {
        let board = board_with(&[
            (sq(9, 0), Piece::RED_MAN),
            (sq(8, 1), Piece::BLACK_MAN),
            (sq(9, 6), Piece::RED_MAN),
            (sq(8, 7), Piece::BLACK_MAN),
            (sq(6, 7), Piece::BLACK_MAN),
        ]);
        let roots = root_candidates(&board, Color::Red, Some(-0.08), &StandardRules);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].from(), sq(9, 6));
    }

    #[test]
    fn king_attacker_preferred() {
        let board = board_with(&[
            (sq(9, 0), Piece::RED_MAN),
            (sq(8, 1), Piece::BLACK_MAN),
            (sq(2, 9), Piece::RED_KING),
            (sq(1, 8), Piece::BLACK_MAN),
        ]);
        let roots = root_candidates(&board, Color::Red, None, &StandardRules);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].from(), sq(2, 9));
    }

    #[test]
    fn promoting_route_preferred() {
        // Both men take one piece; only the one on (2,3) lands on row 0.
        let board = board_with(&[
            (sq(2, 3), Piece::RED_MAN),
            (sq(1, 4), Piece::BLACK_MAN),
            (sq(8, 7), Piece::RED_MAN),
            (sq(7, 8), Piece::BLACK_MAN),
        ]);
        let roots = root_candidates(&board, Color::Red, None, &StandardRules);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].from(), sq(2, 3));
        assert_eq!(roots[0].to(), sq(0, 5));
    }

    #[test]
    fn quiet_roots_use_exchange_filter() {
        let board = board_with(&[(sq(6, 3), Piece::RED_MAN), (sq(4, 5), Piece::BLACK_MAN)]);
        let filtered = root_candidates(&board, Color::Red, Some(-0.08), &StandardRules);
        assert_eq!(
            filtered,
            vec![Move::Quiet {
                from: sq(6, 3),
                to: sq(5, 2)
            }]
        );
        let unfiltered = root_candidates(&board, Color::Red, None, &StandardRules);
        assert_eq!(unfiltered.len(), 2);
    }

    #[test]
    fn no_pieces_no_candidates() {
        assert!(root_candidates(&Board::empty(), Color::Red, Some(-0.08), &StandardRules).is_empty());
    }
}
