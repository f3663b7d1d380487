use thiserror::Error;

/// Errors raised while building a position from external input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("Invalid move notation: {0}")]
    InvalidMove(String),

    #[error("Illegal move in this position: {0}")]
    IllegalMove(String),

    /// A pawn reaches the last rank but no promotion piece was given.
    #[error("Move {0} needs a promotion piece (q, r, b or n)")]
    PromotionRequired(String),
}
