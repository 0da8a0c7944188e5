//! Rook pseudo-move generation: the four orthogonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::pseudo_move::{slide_moves, PseudoMove};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn generate_rook_moves(board: &Board, from: Square, out: &mut Vec<PseudoMove>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    slide_moves(board, from, piece.team, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{square_at, Piece, PieceKind, Team};

    #[test]
    fn rook_on_empty_board_reaches_fourteen_squares() {
        let mut board = Board::empty();
        let d4 = square_at(3, 3);
        board.place(d4, Piece::new(PieceKind::Rook, Team::Black));

        let mut out = Vec::new();
        generate_rook_moves(&board, d4, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn friendly_blocker_is_excluded() {
        let mut board = Board::empty();
        let a1 = square_at(0, 0);
        let a3 = square_at(0, 2);
        board.place(a1, Piece::new(PieceKind::Rook, Team::White));
        board.place(a3, Piece::new(PieceKind::Pawn, Team::White));

        let mut out = Vec::new();
        generate_rook_moves(&board, a1, &mut out);
        assert!(out.iter().all(|mv| mv.to != a3));
        assert!(out.iter().any(|mv| mv.to == square_at(0, 1)));
    }
}
