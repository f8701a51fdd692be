//! Colored draughts piece, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored draughts piece, bit-packed into a single byte.
///
/// Bit layout:
/// - bit 0: [`PieceKind`] (0 = Man, 1 = King)
/// - bit 1: [`Color`] (0 = Red, 1 = Black)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct pieces.
    pub const COUNT: usize = 4;

    pub const RED_MAN: Piece = Piece::new(PieceKind::Man, Color::Red);
    pub const RED_KING: Piece = Piece::new(PieceKind::King, Color::Red);
    pub const BLACK_MAN: Piece = Piece::new(PieceKind::Man, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All pieces in index order.
    pub const ALL: [Piece; 4] = [
        Self::RED_MAN,
        Self::RED_KING,
        Self::BLACK_MAN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 1 | (kind as u8))
    }

    /// Parse a diagram character: `r`/`R` red man/king, `b`/`B` black man/king.
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'r' => Some(Piece::RED_MAN),
            'R' => Some(Piece::RED_KING),
            'b' => Some(Piece::BLACK_MAN),
            'B' => Some(Piece::BLACK_KING),
            _ => None,
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x01 {
            0 => PieceKind::Man,
            _ => PieceKind::King,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 1 {
            0 => Color::Red,
            _ => Color::Black,
        }
    }

    /// Return `true` for a man (an uncrowned piece).
    #[inline]
    pub const fn is_man(self) -> bool {
        self.0 & 0x01 == 0
    }

    /// Return `true` for a king.
    #[inline]
    pub const fn is_king(self) -> bool {
        self.0 & 0x01 == 1
    }

    /// The same piece after crowning.
    #[inline]
    pub const fn crowned(self) -> Piece {
        Piece(self.0 | 0x01)
    }

    /// Material value of the piece.
    #[inline]
    pub const fn value(self) -> f64 {
        self.kind().value()
    }

    /// Return a contiguous index 0-3 for use in fixed-size arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Diagram character: lowercase for men, uppercase for kings.
    pub const fn to_char(self) -> char {
        match (self.color(), self.kind()) {
            (Color::Red, PieceKind::Man) => 'r',
            (Color::Red, PieceKind::King) => 'R',
            (Color::Black, PieceKind::Man) => 'b',
            (Color::Black, PieceKind::King) => 'B',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.color(), self.kind())
    }
}
