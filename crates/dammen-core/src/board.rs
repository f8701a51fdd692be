//! The draughts board: a 10×10 grid of cells with a cached placement hash.

use std::fmt;

use crate::cell::Cell;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::{SIZE, Square};
use crate::zobrist;

/// Piece placement on the 10×10 grid.
///
/// The board does not know whose turn it is; the side to move travels with
/// the search node and is folded into the lookup key by
/// [`position_hash`](crate::position_hash). `Board` is `Copy`, so every
/// search node owns an independent value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; Square::COUNT],
    /// Zobrist hash of the piece placement, maintained incrementally.
    hash: u64,
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [Cell::Empty; Square::COUNT],
            hash: 0,
        }
    }

    /// Return the standard starting position: 20 men per side on the dark
    /// squares, Black on rows 0-3 and Red on rows 6-9.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for sq in Square::all().filter(|s| s.is_dark()) {
            match sq.row() {
                0..=3 => board.set(sq, Cell::Occupied(Piece::BLACK_MAN)),
                6..=9 => board.set(sq, Cell::Occupied(Piece::RED_MAN)),
                _ => {}
            }
        }
        board
    }

    /// Return the cell at `sq`.
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Return the piece at `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].piece()
    }

    /// Return `true` if `sq` holds nothing (no piece and no ghost).
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_empty()
    }

    /// Overwrite the cell at `sq`, updating the hash via XOR toggling.
    pub fn set(&mut self, sq: Square, cell: Cell) {
        if let Some(old) = self.cells[sq.index()].piece() {
            self.hash ^= zobrist::piece_key(old, sq);
        }
        if let Some(new) = cell.piece() {
            self.hash ^= zobrist::piece_key(new, sq);
        }
        self.cells[sq.index()] = cell;
    }

    /// Empty the cell at `sq` and return what was there.
    pub fn take(&mut self, sq: Square) -> Cell {
        let old = self.get(sq);
        self.set(sq, Cell::Empty);
        old
    }

    /// Move whatever stands on `from` to `to`, leaving `from` empty.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let cell = self.take(from);
        self.set(to, cell);
    }

    /// Crown a man standing on its promotion row.
    ///
    /// Returns `true` if the piece was crowned.
    pub fn crown_if_needed(&mut self, sq: Square) -> bool {
        match self.piece_at(sq) {
            Some(piece) if piece.is_man() && sq.row() == piece.color().promotion_row() => {
                self.set(sq, Cell::Occupied(piece.crowned()));
                true
            }
            _ => false,
        }
    }

    /// Iterate over all pieces with their squares, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterate over the squares holding pieces of `color`.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.color() == color)
            .map(|(sq, _)| sq)
    }

    /// Count pieces of `color`.
    pub fn count(&self, color: Color) -> usize {
        self.squares_of(color).count()
    }

    /// Return the Zobrist hash of the piece placement.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a labelled 10×10 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0..SIZE {
            write!(f, "{:>2}  ", SIZE - row)?;
            for col in 0..SIZE {
                let c = Square::new(row, col).map_or('?', |sq| board.get(sq).to_char());
                if col + 1 < SIZE {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h i j")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::sq;

    #[test]
    fn starting_position_counts() {
        let board = Board::starting_position();
        assert_eq!(board.count(Color::Red), 20);
        assert_eq!(board.count(Color::Black), 20);
        assert!(board.pieces().all(|(s, _)| s.is_dark()));
    }

    #[test]
    fn relocate_moves_piece() {
        let mut board = Board::starting_position();
        board.relocate(sq(6, 1), sq(5, 0));
        assert!(board.is_empty(sq(6, 1)));
        assert_eq!(board.piece_at(sq(5, 0)), Some(Piece::RED_MAN));
    }

    #[test]
    fn crown_only_on_promotion_row() {
        let mut board = Board::empty();
        board.set(sq(0, 3), Cell::Occupied(Piece::RED_MAN));
        board.set(sq(1, 4), Cell::Occupied(Piece::RED_MAN));
        board.set(sq(0, 5), Cell::Occupied(Piece::BLACK_MAN));
        assert!(board.crown_if_needed(sq(0, 3)));
        assert!(!board.crown_if_needed(sq(1, 4)));
        assert!(!board.crown_if_needed(sq(0, 5)));
        assert!(!board.crown_if_needed(sq(0, 3)), "already a king");
        assert_eq!(board.piece_at(sq(0, 3)), Some(Piece::RED_KING));
    }

    #[test]
    fn copies_are_independent() {
        let original = Board::starting_position();
        let mut copy = original;
        copy.take(sq(6, 1));
        assert_ne!(original, copy);
        assert_eq!(original.piece_at(sq(6, 1)), Some(Piece::RED_MAN));
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.contains(". b . b . b . b . b"));
        assert!(output.contains("r . r . r . r . r ."));
        assert!(output.contains("a b c d e f g h i j"));
    }
}
