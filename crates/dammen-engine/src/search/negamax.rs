//! Negamax alpha-beta search with a one-ply capture extension.

use dammen_core::{Board, Color, Move, position_hash};

use crate::eval::Evaluator;
use crate::rules::Rules;
use crate::search::apply::apply_move;
use crate::search::control::SearchControl;
use crate::search::legal::generate;
use crate::search::ordering::order_moves;
use crate::search::tt::{Bound, TranspositionTable};

/// Score bound outside any evaluation.
pub const INF: f64 = f64::INFINITY;

/// Search state threaded through negamax calls.
pub(crate) struct SearchContext<'a> {
    /// Total nodes visited.
    pub nodes: u64,
    pub tt: TranspositionTable,
    /// Search control (deadline and node budget).
    pub control: &'a SearchControl,
    pub rules: &'a dyn Rules,
    pub evaluator: &'a dyn Evaluator,
    /// Side the search chooses a move for; evaluations are taken from its
    /// perspective.
    pub root_side: Color,
    /// Extend horizon nodes that have a capture by one ply.
    pub quiescence: bool,
    /// Set once a limit trips; every score computed afterwards is garbage.
    pub aborted: bool,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(
        control: &'a SearchControl,
        rules: &'a dyn Rules,
        evaluator: &'a dyn Evaluator,
        root_side: Color,
        quiescence: bool,
        tt_entries: usize,
    ) -> Self {
        Self {
            nodes: 0,
            tt: TranspositionTable::new(tt_entries),
            control,
            rules,
            evaluator,
            root_side,
            quiescence,
            aborted: false,
        }
    }

    /// Return `true` if the search must unwind, latching the abort flag.
    pub(crate) fn check_stop(&mut self) -> bool {
        if !self.aborted && self.control.should_stop(self.nodes) {
            self.aborted = true;
        }
        self.aborted
    }

    /// Static evaluation from the point of view of `side`.
    fn evaluate(&self, board: &Board, side: Color) -> f64 {
        let score = self.evaluator.evaluate(board, self.root_side, self.rules);
        if side == self.root_side { score } else { -score }
    }
}

/// Negamax alpha-beta search.
///
/// Returns the score of `board` for `side` to move, searched to `depth`
/// plies. `in_quiescence` marks nodes inside the horizon extension; they
/// never extend again and bypass the transposition table.
pub(crate) fn negamax(
    ctx: &mut SearchContext<'_>,
    board: &Board,
    side: Color,
    depth: u8,
    alpha: f64,
    beta: f64,
    in_quiescence: bool,
) -> f64 {
    ctx.nodes += 1;
    if ctx.check_stop() {
        return 0.0;
    }

    let use_tt = depth > 0 && !in_quiescence;
    let key = position_hash(board, side);
    let mut tt_move = None;
    if use_tt && let Some(entry) = ctx.tt.probe(key) {
        if entry.depth == depth && entry.cuts_off(alpha, beta) {
            return entry.score;
        }
        tt_move = entry.best_move.clone();
    }

    let generated = generate(board, side, ctx.rules);

    if depth == 0 {
        if ctx.quiescence && generated.has_captures() && !in_quiescence {
            let captures = order_moves(board, side, generated.captures, None, ctx.rules);
            return search_moves(ctx, board, side, 1, alpha, beta, &captures, true).0;
        }
        return ctx.evaluate(board, side);
    }

    let moves = generated.into_legal();
    if moves.is_empty() {
        return ctx.evaluate(board, side);
    }
    let moves = order_moves(board, side, moves, tt_move.as_ref(), ctx.rules);

    let (best_score, best_index) =
        search_moves(ctx, board, side, depth, alpha, beta, &moves, in_quiescence);
    if ctx.aborted {
        return 0.0;
    }

    if use_tt {
        let bound = if best_score <= alpha {
            Bound::Upper
        } else if best_score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        let best_move = best_index.map(|i| moves[i].clone());
        ctx.tt.store(key, depth, best_score, bound, best_move);
    }
    best_score
}

/// Search `moves` in order, returning the fail-soft best score and the
/// index of the move that produced it.
#[allow(clippy::too_many_arguments)]
fn search_moves(
    ctx: &mut SearchContext<'_>,
    board: &Board,
    side: Color,
    depth: u8,
    mut alpha: f64,
    beta: f64,
    moves: &[Move],
    in_quiescence: bool,
) -> (f64, Option<usize>) {
    let mut best_score = -INF;
    let mut best_index = None;
    for (index, mv) in moves.iter().enumerate() {
        let child = apply_move(board, mv, ctx.rules);
        let score = -negamax(ctx, &child, side.flip(), depth - 1, -beta, -alpha, in_quiescence);
        if ctx.aborted {
            return (0.0, None);
        }
        if score > best_score {
            best_score = score;
            best_index = Some(index);
            if score > alpha {
                alpha = score;
            }
        }
        if alpha >= beta {
            break;
        }
    }
    (best_score, best_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::material::material;
    use crate::rules::StandardRules;
    use dammen_core::{Cell, Piece, Square, sq};

    fn board_with(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(s, p) in pieces {
            board.set(s, Cell::Occupied(p));
        }
        board
    }

    fn material_eval(board: &Board, perspective: Color, rules: &dyn Rules) -> f64 {
        material(board, perspective, rules)
    }

    #[test]
    fn depth_zero_is_static_eval() {
        let board = board_with(&[(sq(6, 3), Piece::RED_MAN), (sq(2, 3), Piece::BLACK_KING)]);
        let control = SearchControl::unlimited();
        let mut ctx =
            SearchContext::new(&control, &StandardRules, &material_eval, Color::Red, true, 64);
        assert_eq!(negamax(&mut ctx, &board, Color::Red, 0, -INF, INF, false), -0.5);
        assert_eq!(negamax(&mut ctx, &board, Color::Black, 0, -INF, INF, false), 0.5);
    }

    #[test]
    fn horizon_capture_is_extended() {
        // Red to move at the horizon with a capture available.
        let board = board_with(&[
            (sq(6, 3), Piece::RED_MAN),
            (sq(5, 4), Piece::BLACK_MAN),
            (sq(0, 1), Piece::BLACK_MAN),
        ]);
        let control = SearchControl::unlimited();
        let mut ctx =
            SearchContext::new(&control, &StandardRules, &material_eval, Color::Red, true, 64);
        assert_eq!(negamax(&mut ctx, &board, Color::Red, 0, -INF, INF, false), 0.0);

        let mut flat =
            SearchContext::new(&control, &StandardRules, &material_eval, Color::Red, false, 64);
        assert_eq!(negamax(&mut flat, &board, Color::Red, 0, -INF, INF, false), -1.0);
    }

    #[test]
    fn stuck_side_scores_static_eval() {
        // The black man on row 9 has no move.
        let board = board_with(&[(sq(9, 0), Piece::BLACK_MAN), (sq(0, 1), Piece::RED_KING)]);
        let control = SearchControl::unlimited();
        let mut ctx =
            SearchContext::new(&control, &StandardRules, &material_eval, Color::Red, false, 64);
        assert_eq!(negamax(&mut ctx, &board, Color::Black, 3, -INF, INF, false), -0.5);
    }

    #[test]
    fn abort_latches() {
        let board = Board::starting_position();
        let control = SearchControl::new(std::time::Duration::from_secs(3600), 5);
        let mut ctx =
            SearchContext::new(&control, &StandardRules, &material_eval, Color::Red, true, 64);
        assert_eq!(negamax(&mut ctx, &board, Color::Red, 4, -INF, INF, false), 0.0);
        assert!(ctx.aborted);
        assert_eq!(ctx.nodes, 6);
    }

    #[test]
    fn results_are_stored_for_interior_nodes() {
        let board = Board::starting_position();
        let control = SearchControl::unlimited();
        let mut ctx =
            SearchContext::new(&control, &StandardRules, &material_eval, Color::Red, true, 1024);
        let score = negamax(&mut ctx, &board, Color::Red, 2, -INF, INF, false);
        let entry = ctx.tt.probe(position_hash(&board, Color::Red));
        assert_eq!(entry.map(|e| (e.depth, e.score, e.bound)), Some((2, score, Bound::Exact)));
        assert!(entry.and_then(|e| e.best_move.as_ref()).is_some());
    }
}
