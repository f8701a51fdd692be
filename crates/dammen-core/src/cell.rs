//! Contents of a single board cell.

use crate::color::Color;
use crate::piece::Piece;

/// A board cell: empty, an immovable ghost obstacle, or a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Blocks sight and movement; can never be captured.
    Ghost,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The piece in the cell, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            _ => None,
        }
    }

    /// The color of the piece in the cell. Ghosts have no color.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Occupied(piece) => Some(piece.color()),
            _ => None,
        }
    }

    /// Return `true` if the cell holds a piece of the opponent of `us`.
    #[inline]
    pub fn is_enemy_of(self, us: Color) -> bool {
        self.color().is_some_and(|c| c != us)
    }

    /// Diagram character for the cell.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ghost => '#',
            Cell::Occupied(piece) => piece.to_char(),
        }
    }

    /// Parse a diagram character.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Ghost),
            _ => Piece::from_char(c).map(Cell::Occupied),
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}
