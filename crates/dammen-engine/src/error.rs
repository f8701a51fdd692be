//! Error types for the rules seam.

use dammen_core::Square;

/// Errors reported by a [`Rules`](crate::Rules) implementation.
///
/// The search treats these as best-effort failures: they are logged and
/// the affected step is skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// Crowning was requested for a square that holds no piece.
    #[error("no piece to crown on {square}")]
    EmptySquare {
        /// The square that was found empty.
        square: Square,
    },
}
