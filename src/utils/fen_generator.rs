//! Position-to-string encoder.
//!
//! Emits the six-field position format: run-length-compressed board layout,
//! side to move, castling rights, en-passant target, half-move clock, and
//! full-move number. The first four fields alone form the position key used
//! for repetition detection.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_record::GameRecord;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_position(record: &GameRecord) -> String {
    format!(
        "{} {} {}",
        generate_position_key(record),
        record.halfmove_clock,
        record.fullmove_number
    )
}

/// Board, side to move, castling rights, and en-passant target — everything
/// that identifies a position for repetition purposes, clocks excluded.
pub fn generate_position_key(record: &GameRecord) -> String {
    format!(
        "{} {} {} {}",
        generate_board_field(&record.board),
        match record.side_to_move {
            Team::White => "w",
            Team::Black => "b",
        },
        generate_castling_field(record.board.castling_rights()),
        generate_en_passant_field(&record.board, record.side_to_move),
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            let square = square_at(file, rank);
            if let Some(piece) = board.piece_at(square) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

pub(crate) fn piece_to_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.team {
        Team::White => base.to_ascii_uppercase(),
        Team::Black => base,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_WHITE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_WHITE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_BLACK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_BLACK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(board: &Board, side_to_move: Team) -> String {
    match board.en_passant_target(side_to_move) {
        Some(square) => square_to_algebraic(square).unwrap_or_else(|_| "-".to_owned()),
        None => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::generate_position;
    use crate::game_state::chess_rules::STARTING_POSITION;
    use crate::game_state::game_record::GameRecord;

    #[test]
    fn round_trip_starting_position() {
        let record = GameRecord::new_game();
        assert_eq!(generate_position(&record), STARTING_POSITION);
    }

    #[test]
    fn round_trip_custom_position() {
        let position = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let record =
            GameRecord::from_position_string(position).expect("custom position should parse");
        assert_eq!(generate_position(&record), position);
    }

    #[test]
    fn round_trip_en_passant_position() {
        let position = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let record = GameRecord::from_position_string(position)
            .expect("en passant position should parse");
        assert_eq!(generate_position(&record), position);
    }
}
