//! Knight pseudo-move generation: the eight fixed offsets.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{file_of, rank_of, square_at, Square};
use crate::moves::pseudo_move::PseudoMove;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_moves(board: &Board, from: Square, out: &mut Vec<PseudoMove>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    for (file_step, rank_step) in KNIGHT_OFFSETS {
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Team};

    #[test]
    fn knight_has_eight_targets_from_d4() {
        let mut board = Board::empty();
        let d4 = square_at(3, 3);
        board.place(d4, Piece::new(PieceKind::Knight, Team::White));

        let mut out = Vec::new();
        generate_knight_moves(&board, d4, &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn corner_knight_has_two_targets_and_skips_friendly() {
        let mut board = Board::empty();
        let a1 = square_at(0, 0);
        board.place(a1, Piece::new(PieceKind::Knight, Team::White));
        board.place(square_at(2, 1), Piece::new(PieceKind::Pawn, Team::White)); // c2

        let mut out = Vec::new();
        generate_knight_moves(&board, a1, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].to, square_at(1, 2)); // b3
    }
}
