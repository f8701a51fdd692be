//! Line protocol errors.

use dammen_core::{BoardError, MoveParseError};

/// Errors that can occur during protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The `position` command names neither `start` nor a diagram.
    #[error("malformed position command: expected start or a diagram")]
    MalformedPosition,

    /// Failed to parse a board diagram.
    #[error("invalid diagram {diagram}: {source}")]
    InvalidDiagram {
        /// The diagram that failed to parse.
        diagram: String,
        source: BoardError,
    },

    /// The side to move is not `red` or `black`.
    #[error("invalid side: {found}")]
    InvalidSide {
        /// The offending token.
        found: String,
    },

    /// Move text could not be parsed.
    #[error(transparent)]
    InvalidMove(#[from] MoveParseError),

    /// Move text parsed but names no legal move.
    #[error("illegal move: {text}")]
    IllegalMove {
        /// The move as given.
        text: String,
    },

    /// Short capture text names more than one legal route.
    #[error("ambiguous move: {text} matches {count} routes, give the full path")]
    AmbiguousMove {
        /// The move as given.
        text: String,
        /// How many legal moves it matches.
        count: usize,
    },

    /// A command parameter is missing its value.
    #[error("missing value for {param}")]
    MissingValue {
        /// The parameter that needed a value.
        param: String,
    },

    /// A command parameter value could not be parsed.
    #[error("invalid value for {param}: {value}")]
    InvalidValue {
        /// The parameter being parsed.
        param: String,
        /// The value that failed to parse.
        value: String,
    },

    /// `setoption` named an option the engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
