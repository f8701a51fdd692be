//! Move representation: a quiet step or a complete capture route.

use std::fmt;
use std::str::FromStr;

use crate::error::MoveParseError;
use crate::square::Square;

/// One fully resolved, maximal capture chain starting from a single origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaptureRoute {
    /// Origin followed by every landing square, in order.
    path: Vec<Square>,
    /// Squares of the captured pieces, in capture order.
    captured: Vec<Square>,
}

impl CaptureRoute {
    /// Create a route from its path and capture list.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the path holds at least the origin and one landing.
    pub fn new(path: Vec<Square>, captured: Vec<Square>) -> CaptureRoute {
        debug_assert!(path.len() >= 2, "capture path needs an origin and a landing");
        CaptureRoute { path, captured }
    }

    /// The square the capturing piece starts from.
    #[inline]
    pub fn origin(&self) -> Square {
        self.path[0]
    }

    /// The final landing square.
    #[inline]
    pub fn destination(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    /// Origin followed by every landing square.
    #[inline]
    pub fn path(&self) -> &[Square] {
        &self.path
    }

    /// Squares of the captured pieces, in capture order.
    #[inline]
    pub fn captured(&self) -> &[Square] {
        &self.captured
    }
}

/// A legal draughts move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// A non-capturing step (man: one cell; king: any clear run).
    Quiet { from: Square, to: Square },
    /// A complete capture chain.
    Capture(CaptureRoute),
}

impl Move {
    /// The square the moving piece starts from.
    pub fn from(&self) -> Square {
        match self {
            Move::Quiet { from, .. } => *from,
            Move::Capture(route) => route.origin(),
        }
    }

    /// The square the moving piece ends on.
    pub fn to(&self) -> Square {
        match self {
            Move::Quiet { to, .. } => *to,
            Move::Capture(route) => route.destination(),
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Capture(_))
    }

    /// The capture route, if this is a capture.
    pub fn route(&self) -> Option<&CaptureRoute> {
        match self {
            Move::Capture(route) => Some(route),
            Move::Quiet { .. } => None,
        }
    }

    /// Return `true` if `text` names this move.
    ///
    /// A capture written with only its origin and final square matches any
    /// route between those squares.
    pub fn matches(&self, text: &MoveText) -> bool {
        match (self, text.is_capture) {
            (Move::Quiet { from, to }, false) => text.squares == [*from, *to],
            (Move::Capture(route), true) => {
                route.path() == text.squares.as_slice()
                    || (text.squares.len() == 2
                        && route.origin() == text.squares[0]
                        && route.destination() == text.squares[1])
            }
            _ => false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Quiet { from, to } => write!(f, "{from}-{to}"),
            Move::Capture(route) => {
                for (i, sq) in route.path().iter().enumerate() {
                    if i > 0 {
                        write!(f, "x")?;
                    }
                    write!(f, "{sq}")?;
                }
                Ok(())
            }
        }
    }
}

/// Parsed move text, matched against generated moves with [`Move::matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveText {
    pub squares: Vec<Square>,
    pub is_capture: bool,
}

impl FromStr for MoveText {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<MoveText, MoveParseError> {
        let s = s.trim();
        let (is_capture, parts): (bool, Vec<&str>) = if s.contains('x') {
            (true, s.split('x').collect())
        } else {
            (false, s.split('-').collect())
        };
        if parts.len() < 2 || (!is_capture && parts.len() != 2) {
            return Err(MoveParseError::Malformed { found: s.to_string() });
        }
        let squares = parts
            .iter()
            .map(|p| {
                Square::from_algebraic(p).ok_or_else(|| MoveParseError::InvalidSquare {
                    found: p.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MoveText { squares, is_capture })
    }
}

#[cfg(test)]
mod tests {
    use super::{CaptureRoute, Move, MoveText};
    use crate::error::MoveParseError;
    use crate::square::sq;

    fn sample_capture() -> Move {
        // c3 x e5 x g7
        Move::Capture(CaptureRoute::new(
            vec![sq(7, 2), sq(5, 4), sq(3, 6)],
            vec![sq(6, 3), sq(4, 5)],
        ))
    }

    #[test]
    fn accessors() {
        let mv = sample_capture();
        assert_eq!(mv.from(), sq(7, 2));
        assert_eq!(mv.to(), sq(3, 6));
        assert!(mv.is_capture());
        assert_eq!(mv.route().map(|r| r.captured().len()), Some(2));

        let quiet = Move::Quiet { from: sq(6, 1), to: sq(5, 0) };
        assert_eq!(quiet.from(), sq(6, 1));
        assert_eq!(quiet.to(), sq(5, 0));
        assert!(quiet.route().is_none());
    }

    #[test]
    fn display() {
        assert_eq!(sample_capture().to_string(), "c3xe5xg7");
        let quiet = Move::Quiet { from: sq(6, 1), to: sq(5, 0) };
        assert_eq!(quiet.to_string(), "b4-a5");
    }

    #[test]
    fn text_matches_full_and_short_capture() {
        let mv = sample_capture();
        assert!(mv.matches(&"c3xe5xg7".parse().unwrap()));
        assert!(mv.matches(&"c3xg7".parse().unwrap()));
        assert!(!mv.matches(&"c3-g7".parse().unwrap()));
        assert!(!mv.matches(&"c3xe5".parse().unwrap()));
    }

    #[test]
    fn text_matches_quiet() {
        let quiet = Move::Quiet { from: sq(6, 1), to: sq(5, 0) };
        assert!(quiet.matches(&"b4-a5".parse().unwrap()));
        assert!(!quiet.matches(&"b4-c5".parse().unwrap()));
    }

    #[test]
    fn text_errors() {
        assert!(matches!(
            "b4".parse::<MoveText>(),
            Err(MoveParseError::Malformed { .. })
        ));
        assert!(matches!(
            "b4-a5-b6".parse::<MoveText>(),
            Err(MoveParseError::Malformed { .. })
        ));
        assert_eq!(
            "b4-z5".parse::<MoveText>(),
            Err(MoveParseError::InvalidSquare { found: "z5".into() })
        );
    }
}
