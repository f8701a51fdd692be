//! Draughts piece kinds.

use std::fmt;

/// The kind of a draughts piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// Forward-only piece capturing by a fixed-distance jump.
    Man = 0,
    /// Promoted, flying piece.
    King = 1,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 2;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 2] = [PieceKind::Man, PieceKind::King];

    /// Return the index (0..1).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Material value used by capture ordering and exchange checks.
    #[inline]
    pub const fn value(self) -> f64 {
        match self {
            PieceKind::Man => 1.0,
            PieceKind::King => 1.5,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Man => write!(f, "man"),
            PieceKind::King => write!(f, "king"),
        }
    }
}
