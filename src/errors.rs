//! Errors used throughout the rules engine.
//!
//! A single crate-wide enum keeps propagation and matching simple. The first
//! three variants are recoverable: the board is left untouched and the caller
//! can simply try again. `InvariantViolation` is not — it indicates a
//! programming error (for example a side with no king) and callers should
//! surface it loudly rather than continue with a corrupt board.

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::square_to_algebraic;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// The proposed move is not legal in the current position. Carries the
    /// squares as played plus a reason suitable for diagnostics.
    #[error("invalid move {}{}: {reason}", fmt_square(*.from), fmt_square(*.to))]
    InvalidMove {
        from: Square,
        to: Square,
        reason: MoveRejection,
    },

    /// A promotion kind outside queen/rook/bishop/knight was supplied, or no
    /// promotion is pending.
    #[error("invalid promotion choice: {0}")]
    InvalidPromotionChoice(String),

    /// A position string failed to parse. The in-memory game is untouched.
    #[error("malformed position string: {0}")]
    MalformedPosition(String),

    /// Internal invariant broken (missing king, corrupt board). Fatal.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Why a move proposal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// No piece of the side to move stands on the origin square.
    NoMovablePiece,
    /// The piece cannot reach the destination, or the destination holds a
    /// friendly piece, or a castling precondition is unmet.
    NotAValidTarget,
    /// The move would leave the mover's own king attacked.
    LeavesKingInCheck,
    /// A castling move whose king would start on, cross, or land on an
    /// attacked square.
    CastlingPathUnsafe,
    /// The game is paused or already over.
    GameNotInProgress,
    /// A promotion choice is still outstanding from the previous proposal.
    PromotionPending,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MoveRejection::NoMovablePiece => "no piece of the side to move on origin square",
            MoveRejection::NotAValidTarget => "destination is not a legal target",
            MoveRejection::LeavesKingInCheck => "move would leave own king in check",
            MoveRejection::CastlingPathUnsafe => "castling path is attacked",
            MoveRejection::GameNotInProgress => "game is not in progress",
            MoveRejection::PromotionPending => "a promotion choice is still pending",
        };
        write!(f, "{text}")
    }
}

fn fmt_square(square: Square) -> String {
    square_to_algebraic(square).unwrap_or_else(|_| format!("#{square}"))
}
