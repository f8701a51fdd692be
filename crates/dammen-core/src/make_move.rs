//! Move execution via copy-make.

use tracing::trace;

use crate::board::Board;
use crate::draughts_move::Move;

impl Board {
    /// Return a new board with `mv` played.
    ///
    /// The moving piece is relocated to its final square, captured pieces
    /// are removed, and a man ending on its promotion row is crowned. A move
    /// whose origin is empty leaves the board unchanged.
    pub fn make_move(&self, mv: &Move) -> Board {
        let mut next = *self;
        if next.piece_at(mv.from()).is_none() {
            trace!(%mv, "origin is empty, board unchanged");
            return next;
        }
        if let Move::Capture(route) = mv {
            for &victim in route.captured() {
                next.take(victim);
            }
        }
        next.relocate(mv.from(), mv.to());
        next.crown_if_needed(mv.to());
        next
    }
}
