//! Move ordering: capture statistics, MVV-LVA, and advancement.
//!
//! Captures come first, ordered by total victim value, then attacker value
//! (kings first), then promotion, then MVV-LVA of the first hop. Quiet
//! moves follow, most advanced destination first. Both sorts are stable.
//! A transposition-table move found in the list is then moved to the front.

use std::cmp::Ordering;

use dammen_core::{Board, Color, Move, Square};

use crate::rules::Rules;
use crate::search::apply::replay_capture;

/// Material facts of one capture route, measured by replaying it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureStats {
    /// Sum of the values of the removed pieces.
    pub victim_sum: f64,
    /// Value of the capturing piece before the route.
    pub attacker_value: f64,
    /// The capturing piece is a man that ends the route as a king.
    pub promotes: bool,
}

impl CaptureStats {
    /// Return `true` if the capturing piece is a king.
    #[inline]
    pub fn king_attacker(&self) -> bool {
        self.attacker_value > 1.0
    }
}

/// Replay `path` and measure what it wins.
pub fn capture_stats(board: &Board, path: &[Square], rules: &dyn Rules) -> CaptureStats {
    let Some(attacker) = path.first().and_then(|&sq| board.piece_at(sq)) else {
        return CaptureStats {
            victim_sum: 0.0,
            attacker_value: 0.0,
            promotes: false,
        };
    };
    let (after, victims) = replay_capture(board, path, rules);
    let promotes = attacker.is_man()
        && path
            .last()
            .and_then(|&sq| after.piece_at(sq))
            .is_some_and(|p| p.is_king());
    CaptureStats {
        victim_sum: victims.iter().map(|(_, p)| p.value()).sum(),
        attacker_value: attacker.value(),
        promotes,
    }
}

/// MVV-LVA score of the first hop, measured on the unmodified board:
/// `100 * victim - attacker`.
pub fn mvv_lva(board: &Board, path: &[Square]) -> f64 {
    let (Some(&from), Some(&to)) = (path.first(), path.get(1)) else {
        return 0.0;
    };
    let victim = from
        .between(to)
        .into_iter()
        .find_map(|sq| board.piece_at(sq))
        .map_or(0.0, |p| p.value());
    let attacker = board.piece_at(from).map_or(0.0, |p| p.value());
    100.0 * victim - attacker
}

/// Rows a quiet move's destination lies toward `side`'s promotion row.
#[inline]
fn advancement(side: Color, to: Square) -> u8 {
    match side {
        Color::Red => 9 - to.row(),
        Color::Black => to.row(),
    }
}

/// Compare two decorated captures, best first.
fn compare_captures(a: &(CaptureStats, f64), b: &(CaptureStats, f64)) -> Ordering {
    let (sa, ma) = a;
    let (sb, mb) = b;
    sb.victim_sum
        .total_cmp(&sa.victim_sum)
        .then(sb.attacker_value.total_cmp(&sa.attacker_value))
        .then(sb.promotes.cmp(&sa.promotes))
        .then(mb.total_cmp(ma))
}

/// Order `moves` for `side`, searching `tt_move` first when present.
pub fn order_moves(
    board: &Board,
    side: Color,
    moves: Vec<Move>,
    tt_move: Option<&Move>,
    rules: &dyn Rules,
) -> Vec<Move> {
    let (captures, mut quiet): (Vec<Move>, Vec<Move>) =
        moves.into_iter().partition(Move::is_capture);

    let mut decorated: Vec<((CaptureStats, f64), Move)> = captures
        .into_iter()
        .map(|mv| {
            let path = mv.route().map_or(&[][..], |r| r.path());
            let key = (capture_stats(board, path, rules), mvv_lva(board, path));
            (key, mv)
        })
        .collect();
    decorated.sort_by(|a, b| compare_captures(&a.0, &b.0));

    quiet.sort_by_key(|mv| std::cmp::Reverse(advancement(side, mv.to())));

    let mut ordered: Vec<Move> = decorated.into_iter().map(|(_, mv)| mv).collect();
    ordered.append(&mut quiet);

    if let Some(tt_move) = tt_move
        && let Some(index) = ordered.iter().position(|mv| mv == tt_move)
        && index > 0
    {
        let mv = ordered.remove(index);
        ordered.insert(0, mv);
    }
    ordered
}
