//! The terminal-state evaluator, run once after every committed move.
//!
//! Classification priority: a side with no legal move is checkmated or
//! stalemated before any clock, repetition, or material draw is considered.
//! The draw conditions themselves are mutually exclusive in normal play.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    FIFTY_MOVE_HALFMOVE_LIMIT, REPETITION_LIMIT, REPETITION_WINDOW,
};
use crate::game_state::chess_types::{GameStatus, PieceKind, Team};
use crate::game_state::game_record::GameRecord;
use crate::move_generation::attack::in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub fn evaluate_status(record: &GameRecord) -> Result<GameStatus, ChessError> {
    let defender = record.side_to_move;

    if record.board.king_square(defender).is_none() {
        return Err(ChessError::InvariantViolation(format!(
            "no king on the board for {defender:?}"
        )));
    }

    if all_legal_moves(record)?.is_empty() {
        return Ok(if in_check(&record.board, defender) {
            GameStatus::Checkmate {
                winner: defender.opposite(),
            }
        } else {
            GameStatus::Stalemate
        });
    }

    if record.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT {
        return Ok(GameStatus::FiftyMoveRule);
    }

    if is_threefold_repetition(record) {
        return Ok(GameStatus::ThreefoldRepetition);
    }

    if is_insufficient_material(&record.board) {
        return Ok(GameStatus::InsufficientMaterial);
    }

    Ok(GameStatus::Playing)
}

/// The same position key (board, turn, castling, en passant — clocks
/// excluded) seen at least three times within the retained window.
fn is_threefold_repetition(record: &GameRecord) -> bool {
    let current = record.position_key();
    let occurrences = record
        .history
        .iter()
        .rev()
        .take(REPETITION_WINDOW)
        .filter(|key| **key == current)
        .count();
    occurrences >= REPETITION_LIMIT
}

/// Neither side can force mate: no pawns anywhere and each surviving set is
/// one of {K}, {K,B}, {K,N}, or bare king versus king plus two knights.
fn is_insufficient_material(board: &Board) -> bool {
    let mut minors: [Vec<PieceKind>; 2] = [Vec::new(), Vec::new()];

    for (_, piece) in board.occupied_squares() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Bishop | PieceKind::Knight => {
                minors[piece.team.index()].push(piece.kind)
            }
            // Any pawn, rook, or queen is mating material.
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }

    let white = &minors[Team::White.index()];
    let black = &minors[Team::Black.index()];

    let lone_or_single_minor = |set: &Vec<PieceKind>| set.len() <= 1;
    if lone_or_single_minor(white) && lone_or_single_minor(black) {
        return true;
    }

    let two_knights = |set: &Vec<PieceKind>| {
        set.len() == 2 && set.iter().all(|kind| *kind == PieceKind::Knight)
    };
    (white.is_empty() && two_knights(black)) || (black.is_empty() && two_knights(white))
}
