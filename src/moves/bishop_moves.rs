//! Bishop pseudo-move generation: the four diagonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::pseudo_move::{slide_moves, PseudoMove};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub fn generate_bishop_moves(board: &Board, from: Square, out: &mut Vec<PseudoMove>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    slide_moves(board, from, piece.team, &BISHOP_DIRECTIONS, out);
}
