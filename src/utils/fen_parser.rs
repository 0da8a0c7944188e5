//! Position-string parser.
//!
//! Rebuilds a full `GameRecord` from the six-field position format.
//! Malformed input (wrong field count, invalid piece letters, out-of-range
//! counts) is rejected with `ChessError::MalformedPosition` before any state
//! is constructed, so a failed load never disturbs an in-memory game.
//!
//! Per-piece moved flags are reconstructed heuristically: a pawn off its
//! start rank has moved, and a rook is marked moved when its castling right
//! is absent from the rights field. A rook that left its corner and returned
//! is indistinguishable from one that never moved — a known limitation of
//! the format, carried as-is.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_record::GameRecord;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_position(text: &str) -> Result<GameRecord, ChessError> {
    let mut parts = text.split_whitespace();

    let board_part = next_field(&mut parts, "board layout")?;
    let side_part = next_field(&mut parts, "side to move")?;
    let castling_part = next_field(&mut parts, "castling rights")?;
    let en_passant_part = next_field(&mut parts, "en-passant target")?;
    let halfmove_part = next_field(&mut parts, "half-move clock")?;
    let fullmove_part = next_field(&mut parts, "full-move number")?;

    if parts.next().is_some() {
        return Err(ChessError::MalformedPosition(
            "position string has extra trailing fields".to_owned(),
        ));
    }

    let mut board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    restrict_rook_flags(&mut board, castling_rights);
    apply_en_passant(&mut board, en_passant_part, side_to_move)?;

    let halfmove_clock = halfmove_part.parse::<u16>().map_err(|_| {
        ChessError::MalformedPosition(format!("invalid half-move clock: {halfmove_part}"))
    })?;
    let fullmove_number = fullmove_part.parse::<u16>().map_err(|_| {
        ChessError::MalformedPosition(format!("invalid full-move number: {fullmove_part}"))
    })?;

    Ok(GameRecord::from_parts(
        board,
        side_to_move,
        halfmove_clock,
        fullmove_number,
    ))
}

fn next_field<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    name: &str,
) -> Result<&'a str, ChessError> {
    parts
        .next()
        .ok_or_else(|| ChessError::MalformedPosition(format!("missing {name} field")))
}

fn parse_board(board_part: &str) -> Result<Board, ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::MalformedPosition(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();

    for (row_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::MalformedPosition(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                continue;
            }

            let piece = piece_from_char(ch, rank).ok_or_else(|| {
                ChessError::MalformedPosition(format!(
                    "invalid piece character '{ch}' in board layout"
                ))
            })?;

            if file >= 8 {
                return Err(ChessError::MalformedPosition(
                    "board rank has too many files".to_owned(),
                ));
            }

            board.place(square_at(file, rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::MalformedPosition(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(board)
}

/// Reconstruct a piece from its letter, inferring the moved flag from its
/// square: pawns off their start rank, and kings/rooks off their home
/// squares, must have moved.
fn piece_from_char(ch: char, rank: u8) -> Option<Piece> {
    let team = if ch.is_ascii_uppercase() {
        Team::White
    } else if ch.is_ascii_lowercase() {
        Team::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    let mut piece = Piece::new(kind, team);
    piece.has_moved = match kind {
        PieceKind::Pawn => rank != team.pawn_start_rank(),
        PieceKind::King | PieceKind::Rook => rank != team.back_rank(),
        _ => false,
    };
    Some(piece)
}

fn parse_side_to_move(side_part: &str) -> Result<Team, ChessError> {
    match side_part {
        "w" => Ok(Team::White),
        "b" => Ok(Team::Black),
        _ => Err(ChessError::MalformedPosition(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => {
                return Err(ChessError::MalformedPosition(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

/// Mark home-square rooks as moved wherever the rights field withholds
/// their castle, so the board-derived rights reproduce the parsed field.
fn restrict_rook_flags(board: &mut Board, rights: CastlingRights) {
    let corners = [
        (CASTLE_WHITE_KINGSIDE, square_at(7, 0), Team::White),
        (CASTLE_WHITE_QUEENSIDE, square_at(0, 0), Team::White),
        (CASTLE_BLACK_KINGSIDE, square_at(7, 7), Team::Black),
        (CASTLE_BLACK_QUEENSIDE, square_at(0, 7), Team::Black),
    ];

    for (bit, corner, team) in corners {
        if (rights & bit) != 0 {
            continue;
        }
        if let Some(piece) = board.piece_at_mut(corner) {
            if piece.kind == PieceKind::Rook && piece.team == team {
                piece.has_moved = true;
            }
        }
    }
}

/// Mark the pawn that skipped over the en-passant target as just double
/// moved. A target with no matching enemy pawn is ignored rather than
/// rejected, mirroring the tolerant handling of unreachable rights.
fn apply_en_passant(
    board: &mut Board,
    en_passant_part: &str,
    side_to_move: Team,
) -> Result<(), ChessError> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let target = algebraic_to_square(en_passant_part)?;
    let enemy = side_to_move.opposite();
    let pawn_rank = rank_of(target) as i8 + enemy.pawn_direction();
    if !(0..8).contains(&pawn_rank) {
        return Ok(());
    }

    let pawn_square = square_at(file_of(target), pawn_rank as u8);
    if let Some(piece) = board.piece_at_mut(pawn_square) {
        if piece.kind == PieceKind::Pawn && piece.team == enemy {
            piece.just_double_moved = true;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_position;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION;
    use crate::game_state::chess_types::{square_at, PieceKind, Team};

    #[test]
    fn parse_starting_position() {
        let record = parse_position(STARTING_POSITION).expect("starting position should parse");
        assert_eq!(record.side_to_move, Team::White);
        assert_eq!(record.halfmove_clock, 0);
        assert_eq!(record.fullmove_number, 1);
        assert_eq!(record.board.occupied_squares().count(), 32);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let err = parse_position("8/8/8/8/8/8/8/8 w - -").expect_err("five fields must fail");
        assert!(matches!(err, ChessError::MalformedPosition(_)));
    }

    #[test]
    fn invalid_piece_letter_is_rejected() {
        let err = parse_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBXR w KQkq - 0 1")
            .expect_err("bad letter must fail");
        assert!(matches!(err, ChessError::MalformedPosition(_)));
    }

    #[test]
    fn short_rank_is_rejected() {
        let err = parse_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPP1P/RNBQKBNR w KQkq - 0 1")
            .expect_err("nine-file rank must fail");
        assert!(matches!(err, ChessError::MalformedPosition(_)));
    }

    #[test]
    fn withheld_castling_right_marks_the_rook_moved() {
        let record =
            parse_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Qkq - 0 1")
                .expect("position should parse");
        let h1_rook = record.board.piece_at(square_at(7, 0)).expect("h1 rook");
        assert!(h1_rook.has_moved);
        let a1_rook = record.board.piece_at(square_at(0, 0)).expect("a1 rook");
        assert!(!a1_rook.has_moved);
    }

    #[test]
    fn en_passant_field_marks_the_double_pushed_pawn() {
        let record =
            parse_position("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
                .expect("position should parse");
        let d5_pawn = record.board.piece_at(square_at(3, 4)).expect("d5 pawn");
        assert_eq!(d5_pawn.kind, PieceKind::Pawn);
        assert!(d5_pawn.just_double_moved);
    }
}
