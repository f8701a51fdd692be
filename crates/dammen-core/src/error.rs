//! Error types for diagram and move-text parsing.

/// Errors that occur when parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The diagram does not describe exactly 10 rows.
    #[error("expected 10 rows in diagram, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 10 cells.
    #[error("row {row} describes {length} cells, expected 10")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors that occur when parsing move text such as `c3-d4` or `c3xe5xg7`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// A square token is not valid notation.
    #[error("invalid square: \"{found}\"")]
    InvalidSquare {
        /// The offending token.
        found: String,
    },
    /// The text is neither `from-to` nor a capture path of two or more squares.
    #[error("malformed move text: \"{found}\"")]
    Malformed {
        /// The whole move text.
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, MoveParseError};

    #[test]
    fn board_error_display() {
        let err = BoardError::WrongRowCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 10 rows in diagram, found 4");
        let err = BoardError::InvalidCellChar { character: 'q' };
        assert_eq!(format!("{err}"), "invalid cell character: 'q'");
    }

    #[test]
    fn move_parse_error_display() {
        let err = MoveParseError::InvalidSquare { found: "z9".into() };
        assert_eq!(format!("{err}"), "invalid square: \"z9\"");
    }
}
