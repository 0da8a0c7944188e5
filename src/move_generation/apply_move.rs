//! The move applier: commit one pseudo-legal move against a cloned record.
//!
//! `apply_move` performs only board, flag, clock, and turn mechanics and
//! returns the successor `GameRecord`; history bookkeeping and terminal
//! classification belong to the commit path in `game_record`. The legality
//! filter calls this on scratch clones, so a probe never mutates the live
//! board and there is no transiently-inconsistent state to observe.

use crate::errors::ChessError;
use crate::game_state::chess_types::{
    file_of, rank_of, square_at, Piece, PieceKind, Square, Team,
};
use crate::game_state::game_record::GameRecord;
use crate::moves::pseudo_move::{MoveEffect, PseudoMove};

pub fn apply_move(
    record: &GameRecord,
    mv: PseudoMove,
    promotion: Option<PieceKind>,
) -> Result<GameRecord, ChessError> {
    let mover = record.board.piece_at(mv.from).ok_or_else(|| {
        ChessError::InvariantViolation(format!("apply_move: no piece on origin square {}", mv.from))
    })?;

    let mut next = record.clone();
    next.board.remove(mv.from);

    match mv.effect {
        MoveEffect::Capture => {
            next.board.remove(mv.to).ok_or_else(|| {
                ChessError::InvariantViolation(format!(
                    "capture move onto empty square {}",
                    mv.to
                ))
            })?;
        }
        MoveEffect::EnPassantCapture => {
            // The victim sits beside the destination, on the mover's
            // originating rank.
            let victim_square = square_at(file_of(mv.to), rank_of(mv.from));
            let victim = next.board.remove(victim_square).ok_or_else(|| {
                ChessError::InvariantViolation(format!(
                    "en passant with no victim pawn on square {victim_square}"
                ))
            })?;
            if victim.kind != PieceKind::Pawn {
                return Err(ChessError::InvariantViolation(
                    "en passant victim is not a pawn".to_owned(),
                ));
            }
        }
        MoveEffect::Plain | MoveEffect::DoublePawnPush => {}
        MoveEffect::CastleKingside | MoveEffect::CastleQueenside => {}
    }

    // Place the mover, promoting if a pawn reached the farthest rank.
    place_mover(&mut next, mover, mv, promotion)?;

    // Relocate the rook to the square adjacent to the king's new position.
    match mv.effect {
        MoveEffect::CastleKingside => {
            relocate_castling_rook(&mut next, mover.team, 7, 5)?;
        }
        MoveEffect::CastleQueenside => {
            relocate_castling_rook(&mut next, mover.team, 0, 3)?;
        }
        _ => {}
    }

    // Exactly one pawn may carry the double-push marker afterwards.
    let keep = (mv.effect == MoveEffect::DoublePawnPush).then_some(mv.to);
    next.board.clear_double_move_flags(keep);

    // Clocks: the half-move clock resets on any capture or pawn move.
    if mover.kind == PieceKind::Pawn || mv.is_capture() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if mover.team == Team::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = mover.team.opposite();

    Ok(next)
}

fn place_mover(
    next: &mut GameRecord,
    mover: Piece,
    mv: PseudoMove,
    promotion: Option<PieceKind>,
) -> Result<(), ChessError> {
    let mut placed = mover;
    placed.has_moved = true;
    placed.just_double_moved = mv.effect == MoveEffect::DoublePawnPush;

    if mover.kind == PieceKind::Pawn && rank_of(mv.to) == mover.team.promotion_rank() {
        let kind = promotion.ok_or_else(|| {
            ChessError::InvariantViolation(
                "pawn reached the farthest rank without a promotion kind".to_owned(),
            )
        })?;
        if !kind.is_valid_promotion() {
            return Err(ChessError::InvalidPromotionChoice(format!("{kind:?}")));
        }
        // The pawn is destroyed and a fresh piece of the chosen kind is
        // created on the same square for the same team.
        placed = Piece {
            kind,
            team: mover.team,
            has_moved: true,
            just_double_moved: false,
        };
    }

    if next.board.place(mv.to, placed).is_some() && mv.effect == MoveEffect::Plain {
        return Err(ChessError::InvariantViolation(format!(
            "plain move onto occupied square {}",
            mv.to
        )));
    }

    Ok(())
}

fn relocate_castling_rook(
    next: &mut GameRecord,
    team: Team,
    rook_file: u8,
    target_file: u8,
) -> Result<(), ChessError> {
    let back = team.back_rank();
    let rook_square = square_at(rook_file, back);
    let mut rook = next.board.remove(rook_square).ok_or_else(|| {
        ChessError::InvariantViolation(format!("castling with no rook on square {rook_square}"))
    })?;
    if rook.kind != PieceKind::Rook {
        return Err(ChessError::InvariantViolation(
            "castling corner piece is not a rook".to_owned(),
        ));
    }
    rook.has_moved = true;
    next.board.place(square_at(target_file, back), rook);
    Ok(())
}
