//! Search algorithms and move ordering.

pub mod control;
pub mod negamax;
pub mod ordering;
pub mod root;
pub mod see;
pub mod tt;

pub(crate) mod apply;
pub(crate) mod legal;

use std::time::Duration;

use tracing::debug;

use dammen_core::{Board, Color, Move};

use crate::eval::Evaluator;
use crate::rules::Rules;
use control::SearchControl;
use negamax::{INF, SearchContext, negamax};
use ordering::order_moves;
use root::root_candidates;
use tt::TranspositionTable;

/// Smallest depth a search is run to.
pub const MIN_DEPTH: u8 = 2;

/// Tunable search parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Wall-clock budget for one search.
    pub time_budget: Duration,
    /// Extend horizon nodes that have a capture by one ply.
    pub quiescence: bool,
    /// Filter hanging quiet moves at the root.
    pub static_exchange: bool,
    /// Lowest exchange score a quiet root move may have.
    pub see_margin: f64,
    /// Nodes a search may visit before it is stopped.
    pub node_budget: u64,
    /// Transposition table slots, rounded up to a power of two.
    pub tt_entries: usize,
}

impl SearchOptions {
    pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(900);
    pub const DEFAULT_SEE_MARGIN: f64 = -0.08;
    pub const DEFAULT_NODE_BUDGET: u64 = 150_000;

    /// Options without practical time or node limits.
    pub fn unbounded() -> Self {
        Self {
            time_budget: Duration::from_secs(24 * 60 * 60),
            node_budget: u64::MAX,
            ..Self::default()
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            time_budget: Self::DEFAULT_TIME_BUDGET,
            quiescence: true,
            static_exchange: true,
            see_margin: Self::DEFAULT_SEE_MARGIN,
            node_budget: Self::DEFAULT_NODE_BUDGET,
            tt_entries: TranspositionTable::DEFAULT_ENTRIES,
        }
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found at the highest completed depth.
    pub best_move: Move,
    /// Score of `best_move` for the side to move.
    pub score: f64,
    /// Depth of the last completed iteration; 0 if none completed.
    pub depth: u8,
    /// Total nodes visited during the search.
    pub nodes: u64,
}

/// Iterative-deepening searcher.
///
/// Every call to [`Searcher::search`] owns a fresh transposition table,
/// node counter and [`SearchControl`].
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    options: SearchOptions,
}

impl Searcher {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Run iterative-deepening search for `side` up to `max_depth`.
    ///
    /// `max_depth` is raised to [`MIN_DEPTH`] when smaller. Calls
    /// `on_iter(depth, score, nodes, best_move)` after each completed
    /// iteration. Returns `None` when `side` has no move.
    pub fn search<F>(
        &self,
        board: &Board,
        side: Color,
        max_depth: u8,
        rules: &dyn Rules,
        evaluator: &dyn Evaluator,
        mut on_iter: F,
    ) -> Option<SearchResult>
    where
        F: FnMut(u8, f64, u64, &Move),
    {
        let options = &self.options;
        let control = SearchControl::new(options.time_budget, options.node_budget);

        let see_margin = options.static_exchange.then_some(options.see_margin);
        let candidates = root_candidates(board, side, see_margin, rules);
        if candidates.is_empty() {
            return None;
        }
        let mut root_moves = order_moves(board, side, candidates, None, rules);

        let mut ctx = SearchContext::new(
            &control,
            rules,
            evaluator,
            side,
            options.quiescence,
            options.tt_entries,
        );

        let max_depth = max_depth.max(MIN_DEPTH);
        let mut completed = SearchResult {
            best_move: root_moves[0].clone(),
            score: 0.0,
            depth: 0,
            nodes: 0,
        };

        for depth in MIN_DEPTH.min(max_depth)..=max_depth {
            let Some((index, score)) = search_root(&mut ctx, board, side, depth, &root_moves)
            else {
                break;
            };

            let best = root_moves.remove(index);
            root_moves.insert(0, best);
            completed = SearchResult {
                best_move: root_moves[0].clone(),
                score,
                depth,
                nodes: ctx.nodes,
            };
            debug!(
                depth,
                score,
                nodes = ctx.nodes,
                best = %completed.best_move,
                elapsed_ms = control.elapsed().as_millis() as u64,
                "iteration complete"
            );
            on_iter(depth, score, ctx.nodes, &completed.best_move);
        }

        completed.nodes = ctx.nodes;
        Some(completed)
    }
}

/// Search every root move to `depth`, returning the index and score of the
/// best one, or `None` if a limit tripped before the iteration finished.
fn search_root(
    ctx: &mut SearchContext<'_>,
    board: &Board,
    side: Color,
    depth: u8,
    root_moves: &[Move],
) -> Option<(usize, f64)> {
    let mut alpha = -INF;
    let mut best: Option<(usize, f64)> = None;
    for (index, mv) in root_moves.iter().enumerate() {
        if ctx.check_stop() {
            return None;
        }
        let child = apply::apply_move(board, mv, ctx.rules);
        let score = -negamax(ctx, &child, side.flip(), depth - 1, -INF, -alpha, false);
        if ctx.aborted {
            return None;
        }
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
            alpha = alpha.max(score);
        }
    }
    best
}

/// Choose a move for `side` with the given options.
///
/// One-shot wrapper around [`Searcher::search`].
pub fn choose_best_move(
    board: &Board,
    side: Color,
    max_depth: u8,
    rules: &dyn Rules,
    evaluator: &dyn Evaluator,
    options: &SearchOptions,
) -> Option<SearchResult> {
    Searcher::new(options.clone()).search(board, side, max_depth, rules, evaluator, |_, _, _, _| {})
}
