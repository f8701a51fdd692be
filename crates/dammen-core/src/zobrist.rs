//! Zobrist hashing keys for transposition lookups.
//!
//! Ghost cells are not hashed: they never move, so they cannot distinguish
//! two positions reached within one search.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Zobrist key for each (piece, square) pair. Indexed by `[Piece::index()][Square::index()]`.
pub(crate) static PIECE_SQUARE: [[u64; Square::COUNT]; Piece::COUNT] = {
    let mut table = [[0u64; Square::COUNT]; Piece::COUNT];
    let mut state = SEED;
    let mut piece = 0;
    while piece < Piece::COUNT {
        let mut sq = 0;
        while sq < Square::COUNT {
            let (val, next) = xorshift64(state);
            table[piece][sq] = val;
            state = next;
            sq += 1;
        }
        piece += 1;
    }
    table
};

/// Zobrist key XORed when Black is the side to move.
pub(crate) static SIDE_TO_MOVE: u64 = {
    let mut state = SEED;
    // Advance past all 4*100 piece-square keys
    let mut i = 0;
    while i < Piece::COUNT * Square::COUNT {
        let (_, next) = xorshift64(state);
        state = next;
        i += 1;
    }
    let (val, _) = xorshift64(state);
    val
};

const SEED: u64 = 0x4441_4d45_4e5a_4f42; // "DAMENZOB"

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

/// Key contribution of `piece` standing on `sq`.
#[inline]
pub(crate) fn piece_key(piece: Piece, sq: Square) -> u64 {
    PIECE_SQUARE[piece.index()][sq.index()]
}

/// Compute the placement hash from scratch.
pub(crate) fn placement_hash_from_scratch(board: &Board) -> u64 {
    board
        .pieces()
        .fold(0u64, |hash, (sq, piece)| hash ^ piece_key(piece, sq))
}

/// Combine a board's placement hash with the side to move.
///
/// This is the key used for transposition-table lookups.
#[inline]
pub fn position_hash(board: &Board, side_to_move: Color) -> u64 {
    match side_to_move {
        Color::Red => board.hash(),
        Color::Black => board.hash() ^ SIDE_TO_MOVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::square::sq;

    #[test]
    fn starting_position_nonzero_hash() {
        let board = Board::starting_position();
        assert_ne!(placement_hash_from_scratch(&board), 0);
    }

    #[test]
    fn incremental_hash_matches_scratch() {
        let mut board = Board::starting_position();
        board.set(sq(6, 1), Cell::Empty);
        board.set(sq(5, 0), Cell::Occupied(Piece::RED_MAN));
        board.set(sq(5, 0), Cell::Occupied(Piece::RED_KING));
        board.set(sq(4, 4), Cell::Ghost);
        assert_eq!(board.hash(), placement_hash_from_scratch(&board));
    }

    #[test]
    fn side_to_move_changes_key() {
        let board = Board::starting_position();
        assert_ne!(
            position_hash(&board, Color::Red),
            position_hash(&board, Color::Black)
        );
    }

    #[test]
    fn ghosts_do_not_change_hash() {
        let mut board = Board::empty();
        let before = board.hash();
        board.set(sq(4, 4), Cell::Ghost);
        assert_eq!(board.hash(), before);
    }

    #[test]
    fn all_keys_are_unique() {
        let mut all_keys: Vec<u64> = PIECE_SQUARE.iter().flatten().copied().collect();
        all_keys.push(SIDE_TO_MOVE);
        let count = all_keys.len();
        all_keys.sort();
        all_keys.dedup();
        assert_eq!(all_keys.len(), count, "some Zobrist keys collide");
    }
}
