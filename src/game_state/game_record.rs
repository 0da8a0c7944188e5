//! The live game: one board plus turn, clocks, status, and bounded history.
//!
//! `GameRecord` is the single entry point for collaborators (UI, persistence,
//! companion game modes). A move proposal flows through the legality filter,
//! is committed via the applier against a clone, and the terminal-state
//! evaluator reclassifies the game before control returns to the caller.
//! Promotion is a two-step transaction: the proposal parks in
//! `pending_promotion` and every other proposal is rejected until the caller
//! supplies a piece kind.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{ChessError, MoveRejection};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{REPETITION_WINDOW, STARTING_POSITION};
use crate::game_state::chess_types::{rank_of, GameStatus, PieceKind, Square, Team};
use crate::game_state::verdict::evaluate_status;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::attack;
use crate::move_generation::legal_move_generator::{legal_moves_from, pseudo_moves};
use crate::moves::pseudo_move::PseudoMove;
use crate::utils::fen_generator::{generate_position, generate_position_key};
use crate::utils::fen_parser::parse_position;

/// Result of a move proposal that was not rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move is legal but lands a pawn on the farthest rank; the commit
    /// is deferred until `choose_promotion` supplies a kind.
    AwaitingPromotion,
    /// The move was committed; carries the re-evaluated game status.
    Committed(GameStatus),
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub board: Board,
    pub side_to_move: Team,
    /// Half-moves since the last capture or pawn move.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    pub status: GameStatus,
    pub pending_promotion: Option<PseudoMove>,
    /// Recent position keys, newest last, truncated to the repetition window.
    pub history: VecDeque<String>,
}

impl GameRecord {
    /// A fresh game with the standard 32-piece layout, White to move.
    pub fn new_game() -> Self {
        parse_position(STARTING_POSITION).expect("starting position should always parse")
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Team,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Self {
        let mut record = GameRecord {
            board,
            side_to_move,
            halfmove_clock,
            fullmove_number,
            status: GameStatus::Playing,
            pending_promotion: None,
            history: VecDeque::new(),
        };
        let key = record.position_key();
        record.history.push_back(key);
        record
    }

    /// Discard all pieces and state and recreate the initial layout.
    pub fn reset(&mut self) {
        *self = GameRecord::new_game();
    }

    #[inline]
    pub fn current_status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Team {
        self.side_to_move
    }

    #[inline]
    pub fn in_check(&self, team: Team) -> bool {
        attack::in_check(&self.board, team)
    }

    /// Board+turn+castling+en-passant identity used for repetition checks.
    pub fn position_key(&self) -> String {
        generate_position_key(self)
    }

    /// Legal destination squares for the piece on `square`, for move-hint
    /// highlighting. Empty squares have no targets.
    pub fn legal_targets(&self, square: Square) -> Result<Vec<Square>, ChessError> {
        Ok(legal_moves_from(self, square)?
            .into_iter()
            .map(|mv| mv.to)
            .collect())
    }

    /// Propose `(from, to)` for the side to move. On success the move is
    /// either committed immediately or parked awaiting a promotion choice.
    /// On rejection the board is untouched and the caller may simply try
    /// another move.
    pub fn propose_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, ChessError> {
        if self.status != GameStatus::Playing {
            return Err(self.rejection(from, to, MoveRejection::GameNotInProgress));
        }
        if self.pending_promotion.is_some() {
            return Err(self.rejection(from, to, MoveRejection::PromotionPending));
        }

        let mover = self
            .board
            .piece_at(from)
            .filter(|piece| piece.team == self.side_to_move)
            .ok_or_else(|| self.rejection(from, to, MoveRejection::NoMovablePiece))?;

        let legal = legal_moves_from(self, from)?;
        let Some(mv) = legal.iter().copied().find(|mv| mv.to == to) else {
            // A surviving pseudo candidate was filtered for king safety;
            // otherwise the geometry never allowed the destination. Both
            // leave the board untouched.
            let candidates = pseudo_moves(&self.board, from);
            let reason = match candidates.iter().find(|mv| mv.to == to) {
                Some(candidate) if candidate.is_castle() => MoveRejection::CastlingPathUnsafe,
                Some(_) => MoveRejection::LeavesKingInCheck,
                None => MoveRejection::NotAValidTarget,
            };
            return Err(self.rejection(from, to, reason));
        };

        if mover.kind == PieceKind::Pawn && rank_of(to) == mover.team.promotion_rank() {
            debug!(from, to, "move accepted, awaiting promotion choice");
            self.pending_promotion = Some(mv);
            return Ok(MoveOutcome::AwaitingPromotion);
        }

        self.commit(mv, None)
    }

    /// Finish a pending promotion transaction with the chosen piece kind.
    /// An external signal (resignation, draw, pause) arriving while the
    /// choice is outstanding takes precedence: the commit is refused and the
    /// pending move stays parked, so a resumed game may still complete it.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> Result<MoveOutcome, ChessError> {
        let Some(mv) = self.pending_promotion else {
            return Err(ChessError::InvalidPromotionChoice(
                "no promotion is pending".to_owned(),
            ));
        };
        if self.status != GameStatus::Playing {
            return Err(self.rejection(mv.from, mv.to, MoveRejection::GameNotInProgress));
        }
        if !kind.is_valid_promotion() {
            return Err(ChessError::InvalidPromotionChoice(format!("{kind:?}")));
        }

        self.pending_promotion = None;
        self.commit(mv, Some(kind))
    }

    /// Apply a legality-checked move, record the new position, and
    /// reclassify the game. All-or-nothing: the applier works on a clone
    /// and `self` is only replaced on success.
    fn commit(
        &mut self,
        mv: PseudoMove,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, ChessError> {
        let mut next = apply_move(self, mv, promotion)?;

        let key = next.position_key();
        next.history.push_back(key);
        while next.history.len() > REPETITION_WINDOW {
            next.history.pop_front();
        }

        next.status = evaluate_status(&next)?;
        debug!(from = mv.from, to = mv.to, ?next.status, "move committed");
        if next.status.is_terminal() {
            info!(status = ?next.status, "game over");
        }

        *self = next;
        Ok(MoveOutcome::Committed(self.status))
    }

    /// Resignation: an external signal, accepted only while the game is in
    /// progress. Returns the (possibly unchanged) status.
    pub fn resign(&mut self, resigner: Team) -> GameStatus {
        if !self.status.is_terminal() {
            self.status = GameStatus::Resigned { resigner };
            info!(?resigner, "game resigned");
        }
        self.status
    }

    /// A draw both players agreed to; accepted only while in progress.
    pub fn offer_mutual_draw(&mut self) -> GameStatus {
        if !self.status.is_terminal() {
            self.status = GameStatus::MutualDraw;
        }
        self.status
    }

    /// Suspend move processing; only meaningful while Playing.
    pub fn pause(&mut self) {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Playing;
        }
    }

    /// The six-field position string of the current board and clocks.
    pub fn to_position_string(&self) -> String {
        generate_position(self)
    }

    /// Load a game from a six-field position string. A parse failure leaves
    /// any existing in-memory game untouched.
    pub fn from_position_string(text: &str) -> Result<GameRecord, ChessError> {
        parse_position(text)
    }

    /// Snapshot for persistence: the position string plus the bounded
    /// repetition history, enough to resume and keep detecting repetition.
    pub fn to_saved_game(&self) -> SavedGame {
        SavedGame {
            position: self.to_position_string(),
            history: self.history.iter().cloned().collect(),
        }
    }

    pub fn from_saved_game(saved: &SavedGame) -> Result<GameRecord, ChessError> {
        let mut record = parse_position(&saved.position)?;
        if !saved.history.is_empty() {
            record.history = saved
                .history
                .iter()
                .rev()
                .take(REPETITION_WINDOW)
                .rev()
                .cloned()
                .collect();
        }
        Ok(record)
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        GameRecord::new_game()
    }
}

/// Persisted form of a game: the six-field position string plus the
/// retained repetition history (newest last).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub position: String,
    pub history: Vec<String>,
}

impl SavedGame {
    pub fn to_json(&self) -> Result<String, ChessError> {
        serde_json::to_string(self)
            .map_err(|err| ChessError::MalformedPosition(err.to_string()))
    }

    pub fn from_json(text: &str) -> Result<SavedGame, ChessError> {
        serde_json::from_str(text)
            .map_err(|err| ChessError::MalformedPosition(err.to_string()))
    }
}

impl GameRecord {
    fn rejection(&self, from: Square, to: Square, reason: MoveRejection) -> ChessError {
        debug!(from, to, %reason, "move rejected");
        ChessError::InvalidMove { from, to, reason }
    }
}
