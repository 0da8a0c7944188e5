//! Perft: exhaustive legal-move tree walks used to validate the generator.
//!
//! Node counts at fixed depths from known positions have published reference
//! values, so any generator bug shows up as a count mismatch long before it
//! would surface in play.

use crate::errors::ChessError;
use crate::game_state::chess_types::{rank_of, PieceKind};
use crate::game_state::game_record::GameRecord;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::pseudo_move::{MoveEffect, PseudoMove};

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Leaf-node tallies of a perft walk, broken down by move effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

/// Count leaf nodes of the legal-move tree rooted at `record`, `depth`
/// half-moves deep. Promotion moves expand into all four piece choices.
pub fn perft(record: &GameRecord, depth: u32) -> Result<PerftCounts, ChessError> {
    let mut counts = PerftCounts::default();
    walk(record, depth, &mut counts)?;
    Ok(counts)
}

fn walk(record: &GameRecord, depth: u32, counts: &mut PerftCounts) -> Result<(), ChessError> {
    if depth == 0 {
        counts.nodes += 1;
        return Ok(());
    }

    for mv in all_legal_moves(record)? {
        // King safety is independent of the promoted kind, so one legality
        // check covers all four choices.
        if is_promotion(record, mv) {
            for kind in PROMOTION_KINDS {
                if depth == 1 {
                    counts.nodes += 1;
                    counts.promotions += 1;
                    tally_effect(mv.effect, counts);
                } else {
                    let next = apply_move(record, mv, Some(kind))?;
                    walk(&next, depth - 1, counts)?;
                }
            }
        } else if depth == 1 {
            counts.nodes += 1;
            tally_effect(mv.effect, counts);
        } else {
            let next = apply_move(record, mv, None)?;
            walk(&next, depth - 1, counts)?;
        }
    }

    Ok(())
}

fn tally_effect(effect: MoveEffect, counts: &mut PerftCounts) {
    match effect {
        MoveEffect::Capture => counts.captures += 1,
        MoveEffect::EnPassantCapture => {
            counts.captures += 1;
            counts.en_passant += 1;
        }
        MoveEffect::CastleKingside | MoveEffect::CastleQueenside => counts.castles += 1,
        MoveEffect::Plain | MoveEffect::DoublePawnPush => {}
    }
}

fn is_promotion(record: &GameRecord, mv: PseudoMove) -> bool {
    record
        .board
        .piece_at(mv.from)
        .is_some_and(|piece| {
            piece.kind == PieceKind::Pawn && rank_of(mv.to) == piece.team.promotion_rank()
        })
}
