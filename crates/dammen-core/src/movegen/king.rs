//! Flying king move generation.
//!
//! A king slides any distance along a clear diagonal. When capturing it
//! may jump a single enemy piece at any distance and land on any empty
//! square behind it, then continue the chain from there. Landings are
//! never repeated, the origin square is never crossed, and on the first
//! hop the king may not pass over squares it has already visited.

use crate::board::Board;
use crate::cell::Cell;
use crate::draughts_move::CaptureRoute;
use crate::piece::Piece;
use crate::square::Square;

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Small set of squares backed by a 128-bit mask.
#[derive(Clone, Copy, Default)]
struct SquareSet(u128);

impl SquareSet {
    #[inline]
    fn contains(self, sq: Square) -> bool {
        self.0 & (1u128 << sq.index()) != 0
    }

    #[inline]
    fn with(self, sq: Square) -> SquareSet {
        SquareSet(self.0 | (1u128 << sq.index()))
    }
}

/// State of one capture chain under construction.
struct Chain {
    piece: Piece,
    origin: Square,
    path: Vec<Square>,
    captured: Vec<Square>,
}

/// Push every square reachable along a clear diagonal from `from`.
pub(super) fn gen_king_quiet(board: &Board, from: Square, out: &mut Vec<Square>) {
    for (dr, dc) in DIAGONALS {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            if !board.is_empty(to) {
                break;
            }
            out.push(to);
            cur = to.offset(dr, dc);
        }
    }
}

/// Push every maximal capture route of the king on `from`.
pub(super) fn gen_king_captures(
    board: &Board,
    from: Square,
    piece: Piece,
    routes: &mut Vec<CaptureRoute>,
) {
    let mut chain = Chain {
        piece,
        origin: from,
        path: vec![from],
        captured: Vec::new(),
    };
    let visited = SquareSet::default().with(from);
    extend(
        *board,
        from,
        SquareSet::default(),
        visited,
        false,
        &mut chain,
        routes,
    );
}

/// Return `true` if any square strictly between `from` and `to`, walking
/// by `(dr, dc)`, satisfies `pred`.
fn crosses(from: Square, to: Square, dr: i8, dc: i8, pred: impl Fn(Square) -> bool) -> bool {
    let mut cur = from.offset(dr, dc);
    while let Some(s) = cur {
        if s == to {
            return false;
        }
        if pred(s) {
            return true;
        }
        cur = s.offset(dr, dc);
    }
    false
}

fn extend(
    board: Board,
    at: Square,
    taken: SquareSet,
    visited: SquareSet,
    first_hop_done: bool,
    chain: &mut Chain,
    routes: &mut Vec<CaptureRoute>,
) {
    let us = chain.piece.color();
    let origin = chain.origin;
    let mut extended = false;

    for (dr, dc) in DIAGONALS {
        // Slide to the first occupied cell on this diagonal.
        let mut cur = at.offset(dr, dc);
        let mut blocked = false;
        while let Some(s) = cur {
            if !board.is_empty(s) {
                break;
            }
            if !first_hop_done && visited.contains(s) {
                blocked = true;
                break;
            }
            cur = s.offset(dr, dc);
        }
        if blocked {
            continue;
        }
        let Some(target) = cur else { continue };

        let cell = board.get(target);
        if !cell.is_enemy_of(us) || taken.contains(target) {
            continue;
        }
        if crosses(at, target, dr, dc, |s| s == origin) {
            continue;
        }

        // Every empty square behind the victim is a candidate landing.
        let mut landing = target.offset(dr, dc);
        while let Some(land) = landing {
            if !board.is_empty(land) {
                break;
            }
            landing = land.offset(dr, dc);

            if visited.contains(land) || land == origin {
                continue;
            }
            if crosses(target, land, dr, dc, |s| s == origin) {
                continue;
            }
            if !first_hop_done && crosses(target, land, dr, dc, |s| visited.contains(s)) {
                continue;
            }

            let mut next = board;
            next.take(at);
            next.take(target);
            next.set(land, Cell::Occupied(chain.piece));

            chain.path.push(land);
            chain.captured.push(target);
            extend(
                next,
                land,
                taken.with(target),
                visited.with(land),
                true,
                chain,
                routes,
            );
            chain.path.pop();
            chain.captured.pop();
            extended = true;
        }
    }

    if !extended && !chain.captured.is_empty() {
        routes.push(CaptureRoute::new(
            chain.path.clone(),
            chain.captured.clone(),
        ));
    }
}
