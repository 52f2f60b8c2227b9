//! Error types for the rules adapter and text parsing.

use thiserror::Error;

/// Recoverable errors raised while building positions or parsing user text.
///
/// Apply/undo contract violations are not represented here; they are
/// programming errors and panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// FEN string rejected by the rules engine
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Text that does not name a square
    #[error("invalid square {0:?} (expected a1..h8)")]
    InvalidSquare(String),

    /// Text that is not coordinate move notation
    #[error("invalid move {0:?} (expected e.g. e2e4 or e7e8q)")]
    InvalidMove(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
