//! Pseudo-legal move description and the shared slider walk used by the
//! rook, bishop, and queen generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{file_of, rank_of, square_at, Square, Team};

/// What committing a move does besides relocating the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    Plain,
    Capture,
    /// Captures the pawn beside the destination, not the destination itself.
    EnPassantCapture,
    DoublePawnPush,
    CastleKingside,
    CastleQueenside,
}

/// A move that obeys piece geometry and occupancy but has not yet been
/// screened for self-check. Only the legality filter certifies legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudoMove {
    pub from: Square,
    pub to: Square,
    pub effect: MoveEffect,
}

impl PseudoMove {
    #[inline]
    pub const fn new(from: Square, to: Square, effect: MoveEffect) -> Self {
        PseudoMove { from, to, effect }
    }

    #[inline]
    pub const fn plain(from: Square, to: Square) -> Self {
        PseudoMove::new(from, to, MoveEffect::Plain)
    }

    #[inline]
    pub const fn capture(from: Square, to: Square) -> Self {
        PseudoMove::new(from, to, MoveEffect::Capture)
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(
            self.effect,
            MoveEffect::Capture | MoveEffect::EnPassantCapture
        )
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(
            self.effect,
            MoveEffect::CastleKingside | MoveEffect::CastleQueenside
        )
    }
}

/// Walk each direction one square at a time, stopping at the first occupied
/// square and including it only as an enemy capture.
pub(crate) fn slide_moves(
    board: &Board,
    from: Square,
    team: Team,
    directions: &[(i8, i8)],
    out: &mut Vec<PseudoMove>,
) {
    for &(file_step, rank_step) in directions {
        let mut file = file_of(from) as i8 + file_step;
        let mut rank = rank_of(from) as i8 + rank_step;

        while (0..8).contains(&file) && (0..8).contains(&rank) {
            let to = square_at(file as u8, rank as u8);
            match board.piece_at(to) {
                None => out.push(PseudoMove::plain(from, to)),
                Some(occupant) => {
                    if occupant.team != team {
                        out.push(PseudoMove::capture(from, to));
                    }
                    break;
                }
            }
            file += file_step;
            rank += rank_step;
        }
    }
}

