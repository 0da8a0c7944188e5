//! King pseudo-move generation: the one-step neighborhood plus castling
//! candidates.
//!
//! Castling here checks only the static preconditions (unmoved king, unmoved
//! rook, empty squares strictly between them). The attacked-path conditions
//! are the legality filter's responsibility, which also keeps the attack
//! oracle free of castling geometry and so free of king/king recursion.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{file_of, rank_of, square_at, Piece, PieceKind, Square};
use crate::moves::pseudo_move::{MoveEffect, PseudoMove};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn generate_king_moves(board: &Board, from: Square, out: &mut Vec<PseudoMove>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    for (file_step, rank_step) in KING_OFFSETS {
        let file = file_of(from) as i8 + file_step;
        let rank = rank_of(from) as i8 + rank_step;
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            continue;
        }

        let to = square_at(file as u8, rank as u8);
        match board.piece_at(to) {
            None => out.push(PseudoMove::plain(from, to)),
            Some(occupant) if occupant.team != piece.team => {
                out.push(PseudoMove::capture(from, to))
            }
            Some(_) => {}
        }
    }

    if piece.kind == PieceKind::King && !piece.has_moved {
        generate_castling_candidates(board, from, out);
    }
}

fn generate_castling_candidates(board: &Board, king_from: Square, out: &mut Vec<PseudoMove>) {
    let Some(king) = board.piece_at(king_from) else {
        return;
    };
    let back = king.team.back_rank();
    if king_from != square_at(4, back) {
        return;
    }

    // Kingside: rook on the h-file, f and g empty.
    if unmoved_rook(board, square_at(7, back), king)
        && board.is_empty_square(square_at(5, back))
        && board.is_empty_square(square_at(6, back))
    {
        out.push(PseudoMove::new(
            king_from,
            square_at(6, back),
            MoveEffect::CastleKingside,
        ));
    }

    // Queenside: rook on the a-file, b, c and d empty.
    if unmoved_rook(board, square_at(0, back), king)
        && board.is_empty_square(square_at(1, back))
        && board.is_empty_square(square_at(2, back))
        && board.is_empty_square(square_at(3, back))
    {
        out.push(PseudoMove::new(
            king_from,
            square_at(2, back),
            MoveEffect::CastleQueenside,
        ));
    }
}

fn unmoved_rook(board: &Board, square: Square, king: Piece) -> bool {
    matches!(
        board.piece_at(square),
        Some(rook) if rook.kind == PieceKind::Rook && rook.team == king.team && !rook.has_moved
    )
}
