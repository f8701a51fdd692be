//! Core draughts types: board representation, move generation, and game rules.

mod board;
mod cell;
mod color;
mod diagram;
mod draughts_move;
mod error;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;
mod zobrist;

pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use color::Color;
pub use diagram::STARTING_DIAGRAM;
pub use draughts_move::{CaptureRoute, Move, MoveText};
pub use error::{BoardError, MoveParseError};
pub use movegen::{PieceMoves, has_capture, legal_moves, piece_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::{SIZE, Square, sq};
pub use zobrist::position_hash;
