//! Queen pseudo-move generation: union of the rook and bishop rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::pseudo_move::{slide_moves, PseudoMove};
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_queen_moves(board: &Board, from: Square, out: &mut Vec<PseudoMove>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    slide_moves(board, from, piece.team, &ROOK_DIRECTIONS, out);
    slide_moves(board, from, piece.team, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{square_at, Piece, PieceKind, Team};

    #[test]
    fn queen_on_empty_board_reaches_twenty_seven_squares_from_d4() {
        let mut board = Board::empty();
        let d4 = square_at(3, 3);
        board.place(d4, Piece::new(PieceKind::Queen, Team::White));

        let mut out = Vec::new();
        generate_queen_moves(&board, d4, &mut out);
        assert_eq!(out.len(), 27);
    }
}
