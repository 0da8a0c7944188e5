//! The legality filter: pseudo-legal candidates in, legal moves out.
//!
//! Every candidate is applied to a scratch clone of the record and discarded
//! if the mover's own king ends up attacked. Castling candidates must also
//! start outside check and keep the king off attacked squares along its
//! entire path. This module is the single authority for "this move is
//! legal"; the per-kind generators alone never certify legality.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{rank_of, square_at, PieceKind, Square, Team};
use crate::game_state::game_record::GameRecord;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::attack::{in_check, is_square_attacked};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::pseudo_move::{MoveEffect, PseudoMove};
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Pseudo-legal moves for the piece on `from`, dispatched by kind.
pub fn pseudo_moves(board: &Board, from: Square) -> Vec<PseudoMove> {
    let mut out = Vec::new();
    let Some(piece) = board.piece_at(from) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, &mut out),
        PieceKind::King => generate_king_moves(board, from, &mut out),
    }

    out
}

/// Legal moves for the piece on `from`, regardless of whose turn it is.
pub fn legal_moves_from(
    record: &GameRecord,
    from: Square,
) -> Result<Vec<PseudoMove>, ChessError> {
    let Some(piece) = record.board.piece_at(from) else {
        return Ok(Vec::new());
    };

    let candidates = pseudo_moves(&record.board, from);
    let mut legal = Vec::with_capacity(candidates.len());

    for mv in candidates {
        if mv.is_castle() && !castle_path_is_safe(&record.board, mv, piece.team) {
            continue;
        }

        // For a promoting candidate the chosen kind cannot change whether
        // the mover's king is safe, so probe with a queen stand-in.
        let probe_promotion = (piece.kind == PieceKind::Pawn
            && rank_of(mv.to) == piece.team.promotion_rank())
        .then_some(PieceKind::Queen);

        let next = apply_move(record, mv, probe_promotion)?;
        if in_check(&next.board, piece.team) {
            continue;
        }

        legal.push(mv);
    }

    Ok(legal)
}

/// Every legal move for the side to move.
pub fn all_legal_moves(record: &GameRecord) -> Result<Vec<PseudoMove>, ChessError> {
    let origins: Vec<Square> = record
        .board
        .squares_of(record.side_to_move)
        .map(|(square, _)| square)
        .collect();

    let mut legal = Vec::new();
    for from in origins {
        legal.extend(legal_moves_from(record, from)?);
    }

    Ok(legal)
}

/// The king may not castle out of, through, or into check. The path covers
/// the start square, the crossed square, and the landing square.
fn castle_path_is_safe(board: &Board, mv: PseudoMove, team: Team) -> bool {
    let back = team.back_rank();
    let enemy = team.opposite();
    let files: [u8; 3] = match mv.effect {
        MoveEffect::CastleKingside => [4, 5, 6],
        MoveEffect::CastleQueenside => [4, 3, 2],
        _ => return true,
    };

    files
        .iter()
        .all(|&file| !is_square_attacked(board, square_at(file, back), enemy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Team;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn starting_position_has_exactly_twenty_legal_moves() {
        let record = GameRecord::new_game();
        let legal = all_legal_moves(&record).expect("generation should succeed");
        assert_eq!(legal.len(), 20);
    }

    #[test]
    fn pinned_piece_may_not_expose_its_king() {
        // Black queen on e7 pins the white knight on e3 against the e1 king.
        let record =
            GameRecord::from_position_string("4k3/4q3/8/8/8/4N3/8/4K3 w - - 0 1")
                .expect("pin position should parse");

        let knight_moves =
            legal_moves_from(&record, sq("e3")).expect("generation should succeed");
        assert!(knight_moves.is_empty());
    }

    #[test]
    fn king_must_step_out_of_a_rook_line() {
        let record = GameRecord::from_position_string("4k3/8/8/8/8/8/8/r3K3 w - - 0 1")
            .expect("check position should parse");

        let king_moves =
            legal_moves_from(&record, sq("e1")).expect("generation should succeed");
        // Staying on the first rank keeps the king in the rook's line, so
        // only the three second-rank squares remain.
        assert_eq!(king_moves.len(), 3);
        assert!(king_moves.iter().all(|mv| rank_of(mv.to) == 1));
    }

    #[test]
    fn castling_is_rejected_while_the_path_is_attacked() {
        // Black rook on f8 covers f1, the square the white king must cross.
        let record =
            GameRecord::from_position_string("4kr2/8/8/8/8/8/8/4K2R w K - 0 1")
                .expect("castle position should parse");

        let king_moves =
            legal_moves_from(&record, sq("e1")).expect("generation should succeed");
        assert!(king_moves
            .iter()
            .all(|mv| mv.effect != MoveEffect::CastleKingside));
    }

    #[test]
    fn castling_is_rejected_out_of_check() {
        let record =
            GameRecord::from_position_string("4k3/8/8/8/8/8/4r3/4K2R w K - 0 1")
                .expect("in-check castle position should parse");

        let king_moves =
            legal_moves_from(&record, sq("e1")).expect("generation should succeed");
        assert!(king_moves.iter().all(|mv| !mv.is_castle()));
    }

    #[test]
    fn no_legal_move_ever_leaves_the_mover_in_check() {
        use rand::prelude::IndexedRandom;

        let mut rng = rand::rng();
        for _ in 0..100 {
            // Walk a random playout to reach an arbitrary position, then
            // verify the property for every legal move found there.
            let mut record = GameRecord::new_game();
            for _ in 0..12 {
                let moves = all_legal_moves(&record).expect("generation should succeed");
                let Some(&mv) = moves.as_slice().choose(&mut rng) else {
                    break;
                };
                let mover = record.side_to_move;
                let probe = (record
                    .board
                    .piece_at(mv.from)
                    .is_some_and(|p| p.kind == PieceKind::Pawn)
                    && rank_of(mv.to) == mover.promotion_rank())
                .then_some(PieceKind::Queen);
                record = apply_move(&record, mv, probe).expect("legal move applies");
                assert!(
                    !in_check(&record.board, mover),
                    "a legal move left its own king in check"
                );
            }
        }
    }

    #[test]
    fn legal_targets_exist_for_both_teams_regardless_of_turn() {
        let record = GameRecord::new_game();
        assert_eq!(record.side_to_move, Team::White);
        let black_knight =
            legal_moves_from(&record, sq("b8")).expect("generation should succeed");
        assert_eq!(black_knight.len(), 2);
    }
}
