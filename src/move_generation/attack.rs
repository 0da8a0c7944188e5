//! The attack oracle: "is this square attacked by that team".
//!
//! Uses each kind's capture geometry directly rather than full pseudo-move
//! generation. Pawns attack only diagonally (never with the forward-push
//! pattern) and kings attack only their one-step neighborhood, so two kings
//! can probe each other's squares without recursing.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{file_of, rank_of, square_at, PieceKind, Square, Team};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// True iff any piece of `by_team` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, by_team: Team) -> bool {
    attacked_by_pawn(board, square, by_team)
        || attacked_by_offset_piece(board, square, by_team, PieceKind::Knight, &KNIGHT_OFFSETS)
        || attacked_by_offset_piece(board, square, by_team, PieceKind::King, &KING_OFFSETS)
        || attacked_by_slider(board, square, by_team, &BISHOP_DIRECTIONS, PieceKind::Bishop)
        || attacked_by_slider(board, square, by_team, &ROOK_DIRECTIONS, PieceKind::Rook)
}

#[inline]
pub fn in_check(board: &Board, team: Team) -> bool {
    match board.king_square(team) {
        Some(king_sq) => is_square_attacked(board, king_sq, team.opposite()),
        None => false,
    }
}

/// Pawn attacks use the diagonal-capture geometry: a pawn of `by_team`
/// attacks `square` if it stands one rank behind it on an adjacent file.
fn attacked_by_pawn(board: &Board, square: Square, by_team: Team) -> bool {
    let origin_rank = rank_of(square) as i8 - by_team.pawn_direction();
    if !(0..8).contains(&origin_rank) {
        return false;
    }

    for file_step in [-1i8, 1i8] {
        let origin_file = file_of(square) as i8 + file_step;
        if !(0..8).contains(&origin_file) {
            continue;
        }
        let origin = square_at(origin_file as u8, origin_rank as u8);
        if matches!(
            board.piece_at(origin),
            Some(piece) if piece.kind == PieceKind::Pawn && piece.team == by_team
        ) {
            return true;
        }
    }

    false
}

fn attacked_by_offset_piece(
    board: &Board,
    square: Square,
    by_team: Team,
    kind: PieceKind,
    offsets: &[(i8, i8)],
) -> bool {
    for &(file_step, rank_step) in offsets {
        let file = file_of(square) as i8 + file_step;
        let rank = rank_of(square) as i8 + rank_step;
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            continue;
        }
        let origin = square_at(file as u8, rank as u8);
        if matches!(
            board.piece_at(origin),
            Some(piece) if piece.kind == kind && piece.team == by_team
        ) {
            return true;
        }
    }

    false
}

/// Walk each ray away from `square`; the first occupant decides. A matching
/// slider or a queen of `by_team` attacks through the empty run.
fn attacked_by_slider(
    board: &Board,
    square: Square,
    by_team: Team,
    directions: &[(i8, i8)],
    slider_kind: PieceKind,
) -> bool {
    for &(file_step, rank_step) in directions {
        let mut file = file_of(square) as i8 + file_step;
        let mut rank = rank_of(square) as i8 + rank_step;

        while (0..8).contains(&file) && (0..8).contains(&rank) {
            if let Some(piece) = board.piece_at(square_at(file as u8, rank as u8)) {
                if piece.team == by_team
                    && (piece.kind == slider_kind || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            file += file_step;
            rank += rank_step;
        }
    }

    false
}
