//! Move application through the [`Rules`] seam.
//!
//! Capture paths are replayed hop by hop: for each hop the single occupied
//! cell strictly between its endpoints is removed when it holds an enemy
//! piece, the mover lands, and crowning is attempted. Crowning failures are
//! logged and ignored.

use tracing::trace;

use dammen_core::{Board, Color, Move, Piece, Square};

use crate::rules::Rules;

/// Attempt to crown the piece on `sq`, ignoring failures.
pub(crate) fn crown(board: &mut Board, sq: Square, rules: &dyn Rules) {
    if let Err(err) = rules.crown_if_needed(board, sq) {
        trace!(%err, "crowning skipped");
    }
}

/// The enemy piece jumped by a hop from `from` to `to`, if exactly one.
///
/// Returns `None` when the segment holds no occupied cell, more than one,
/// a piece of `mover`, or a ghost.
pub(crate) fn jumped_square(
    board: &Board,
    from: Square,
    to: Square,
    mover: Color,
    rules: &dyn Rules,
) -> Option<Square> {
    let mut occupied = from.between(to).into_iter().filter(|&s| !board.is_empty(s));
    let victim = occupied.next()?;
    if occupied.next().is_some() {
        return None;
    }
    match rules.color_of(board.get(victim)) {
        Some(color) if color != mover => Some(victim),
        _ => None,
    }
}

/// Play a single hop, returning the new board and the removed piece.
fn apply_hop(
    board: &Board,
    from: Square,
    to: Square,
    rules: &dyn Rules,
) -> (Board, Option<(Square, Piece)>) {
    let mut next = *board;
    let Some(piece) = board.piece_at(from) else {
        return (next, None);
    };
    let Some(mover) = rules.color_of(board.get(from)) else {
        return (next, None);
    };
    let victim = jumped_square(board, from, to, mover, rules)
        .and_then(|sq| board.piece_at(sq).map(|p| (sq, p)));

    next.take(from);
    next.set(to, piece.into());
    if let Some((sq, _)) = victim {
        next.take(sq);
    }
    crown(&mut next, to, rules);
    (next, victim)
}

/// Replay `path` on a copy of `board`, returning the final board and the
/// pieces removed along the way.
///
/// A path whose origin is empty leaves the board unchanged.
pub(crate) fn replay_capture(
    board: &Board,
    path: &[Square],
    rules: &dyn Rules,
) -> (Board, Vec<(Square, Piece)>) {
    let mut current = *board;
    let mut victims = Vec::new();
    if path.first().is_none_or(|&origin| board.piece_at(origin).is_none()) {
        return (current, victims);
    }
    for hop in path.windows(2) {
        let (next, victim) = apply_hop(&current, hop[0], hop[1], rules);
        current = next;
        victims.extend(victim);
    }
    (current, victims)
}

/// Return a new board with `mv` applied.
pub(crate) fn apply_move(board: &Board, mv: &Move, rules: &dyn Rules) -> Board {
    match mv {
        Move::Quiet { from, to } => {
            let mut next = rules.apply_quiet(board, *from, *to);
            crown(&mut next, *to, rules);
            next
        }
        Move::Capture(route) => replay_capture(board, route.path(), rules).0,
    }
}
