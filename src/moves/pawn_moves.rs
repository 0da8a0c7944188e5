//! Pawn pseudo-move generation.
//!
//! Pawns are the one kind whose capture geometry differs from its movement
//! geometry: forward pushes are blocked by any occupant, diagonal steps
//! exist only as captures, and en passant captures land on an empty square
//! beside the enemy pawn that just double-pushed.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{file_of, rank_of, square_at, PieceKind, Square};
use crate::moves::pseudo_move::{MoveEffect, PseudoMove};

pub fn generate_pawn_moves(board: &Board, from: Square, out: &mut Vec<PseudoMove>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    if piece.kind != PieceKind::Pawn {
        return;
    }

    let team = piece.team;
    let dir = team.pawn_direction();
    let file = file_of(from) as i8;
    let rank = rank_of(from) as i8;

    // Forward pushes.
    let one_rank = rank + dir;
    if (0..8).contains(&one_rank) {
        let one_step = square_at(file as u8, one_rank as u8);
        if board.is_empty_square(one_step) {
            out.push(PseudoMove::plain(from, one_step));

            if !piece.has_moved && rank == team.pawn_start_rank() as i8 {
                let two_step = square_at(file as u8, (rank + 2 * dir) as u8);
                if board.is_empty_square(two_step) {
                    out.push(PseudoMove::new(from, two_step, MoveEffect::DoublePawnPush));
                }
            }
        }
    }

    // Diagonal captures, ordinary and en passant.
    let en_passant_target = board.en_passant_target(team);
    for file_step in [-1i8, 1i8] {
        let capture_file = file + file_step;
        if !(0..8).contains(&capture_file) || !(0..8).contains(&one_rank) {
            continue;
        }

        let to = square_at(capture_file as u8, one_rank as u8);
        match board.piece_at(to) {
            Some(occupant) if occupant.team != team => {
                out.push(PseudoMove::capture(from, to));
            }
            Some(_) => {}
            None => {
                if en_passant_target == Some(to) {
                    out.push(PseudoMove::new(from, to, MoveEffect::EnPassantCapture));
                }
            }
        }
    }
}
