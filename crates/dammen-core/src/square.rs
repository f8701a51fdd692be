//! Board squares of the 10×10 grid.

use std::fmt;

/// Number of rows (and columns) on the board.
pub const SIZE: u8 = 10;

/// A square on the board, encoded as `row * 10 + col`.
///
/// Row 0 is Black's back row (top of the diagram), row 9 is Red's. The text
/// form is `<file><rank>`: file `a..j` is column 0..9 and rank `1..10`
/// counts rows from the bottom, so `a1` is row 9, column 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 100;

    /// Create a square from a row and column, returning `None` if off-board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < SIZE && col < SIZE {
            Some(Square(row * SIZE + col))
        } else {
            None
        }
    }

    /// Create a square from signed coordinates, returning `None` if off-board.
    #[inline]
    pub fn from_coords(row: i64, col: i64) -> Option<Square> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Square::new(row, col)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if (index as usize) < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parse text notation (e.g. `c3`, `j10`).
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?;
        if !('a'..='j').contains(&file) {
            return None;
        }
        let rank: u8 = chars.as_str().parse().ok()?;
        if !(1..=SIZE).contains(&rank) {
            return None;
        }
        Square::new(SIZE - rank, file as u8 - b'a')
    }

    /// Return the zero-based index (0..99).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / SIZE
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % SIZE
    }

    /// Return `true` for the dark squares used by the standard layout.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Step by `(dr, dc)`, returning `None` when leaving the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row() as i16 + dr as i16;
        let col = self.col() as i16 + dc as i16;
        if (0..SIZE as i16).contains(&row) && (0..SIZE as i16).contains(&col) {
            Some(Square((row * SIZE as i16 + col) as u8))
        } else {
            None
        }
    }

    /// Squares strictly between `self` and `to` on a shared diagonal.
    ///
    /// Returns an empty list when the two squares are not diagonally aligned.
    pub fn between(self, to: Square) -> Vec<Square> {
        let dr = to.row() as i16 - self.row() as i16;
        let dc = to.col() as i16 - self.col() as i16;
        if dr == 0 || dr.abs() != dc.abs() {
            return Vec::new();
        }
        let (sr, sc) = (dr.signum() as i8, dc.signum() as i8);
        let mut cells = Vec::with_capacity(dr.unsigned_abs() as usize);
        let mut cur = self;
        while let Some(next) = cur.offset(sr, sc) {
            if next == to {
                break;
            }
            cells.push(next);
            cur = next;
        }
        cells
    }

    /// Iterate over all 100 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..Self::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, SIZE - self.row())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({},{})", self.row(), self.col())
    }
}

/// Build a square from literal coordinates known to be on the board.
///
/// # Panics
///
/// Panics if `row` or `col` is not below 10.
pub const fn sq(row: u8, col: u8) -> Square {
    match Square::new(row, col) {
        Some(s) => s,
        None => panic!("square off the board"),
    }
}

#[cfg(test)]
mod tests {
    use super::{Square, sq};

    #[test]
    fn row_col_roundtrip() {
        for s in Square::all() {
            assert_eq!(Square::new(s.row(), s.col()), Some(s));
        }
        assert_eq!(Square::all().count(), 100);
    }

    #[test]
    fn out_of_range() {
        assert!(Square::new(10, 0).is_none());
        assert!(Square::new(0, 10).is_none());
        assert!(Square::from_index(100).is_none());
        assert!(Square::from_coords(-1, 3).is_none());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Some(sq(9, 0)));
        assert_eq!(Square::from_algebraic("j10"), Some(sq(0, 9)));
        assert_eq!(Square::from_algebraic("c3"), Some(sq(7, 2)));
        assert_eq!(format!("{}", sq(7, 2)), "c3");
        assert_eq!(format!("{}", sq(0, 9)), "j10");
        assert!(Square::from_algebraic("k1").is_none());
        assert!(Square::from_algebraic("a0").is_none());
        assert!(Square::from_algebraic("a11").is_none());
        assert!(Square::from_algebraic("").is_none());
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(sq(5, 5).offset(-1, 1), Some(sq(4, 6)));
        assert!(sq(0, 0).offset(-1, -1).is_none());
        assert!(sq(9, 9).offset(1, 0).is_none());
    }

    #[test]
    fn between_diagonal() {
        assert_eq!(sq(9, 0).between(sq(6, 3)), vec![sq(8, 1), sq(7, 2)]);
        assert!(sq(5, 5).between(sq(4, 4)).is_empty());
        assert!(sq(5, 5).between(sq(5, 8)).is_empty());
    }

    #[test]
    fn dark_squares() {
        assert!(sq(0, 1).is_dark());
        assert!(!sq(0, 0).is_dark());
    }
}
