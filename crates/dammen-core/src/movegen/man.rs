//! Man (simple piece) move generation: forward steps and forced jump chains.

use crate::board::Board;
use crate::cell::Cell;
use crate::draughts_move::CaptureRoute;
use crate::piece::Piece;
use crate::square::Square;

/// Column deltas of the two forward diagonals.
const SIDEWAYS: [i8; 2] = [-1, 1];

/// Push every empty forward diagonal neighbour of `from`.
pub(super) fn gen_man_quiet(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    let dr = piece.color().forward();
    for dc in SIDEWAYS {
        if let Some(to) = from.offset(dr, dc)
            && board.is_empty(to)
        {
            out.push(to);
        }
    }
}

/// Push every maximal capture route of the man on `from`.
pub(super) fn gen_man_captures(
    board: &Board,
    from: Square,
    piece: Piece,
    routes: &mut Vec<CaptureRoute>,
) {
    let mut path = vec![from];
    let mut captured = Vec::new();
    extend(*board, from, piece, &mut path, &mut captured, routes);
}

fn extend(
    board: Board,
    at: Square,
    piece: Piece,
    path: &mut Vec<Square>,
    captured: &mut Vec<Square>,
    routes: &mut Vec<CaptureRoute>,
) {
    let us = piece.color();
    let dr = us.forward();
    let mut extended = false;

    for dc in SIDEWAYS {
        let (Some(mid), Some(landing)) = (at.offset(dr, dc), at.offset(2 * dr, 2 * dc)) else {
            continue;
        };
        if !board.get(mid).is_enemy_of(us) || !board.is_empty(landing) {
            continue;
        }

        let mut next = board;
        next.take(at);
        next.take(mid);
        next.set(landing, Cell::Occupied(piece));

        path.push(landing);
        captured.push(mid);
        if landing.row() == us.promotion_row() {
            // Reaching the promotion row ends the chain even if another jump exists.
            routes.push(CaptureRoute::new(path.clone(), captured.clone()));
        } else {
            extend(next, landing, piece, path, captured, routes);
        }
        path.pop();
        captured.pop();
        extended = true;
    }

    if !extended && !captured.is_empty() {
        routes.push(CaptureRoute::new(path.clone(), captured.clone()));
    }
}
