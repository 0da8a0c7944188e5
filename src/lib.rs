//! Crate root module declarations for the Cedar Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, per-piece move
//! geometry, the legality/apply pipeline, and utility helpers) so tests,
//! benches, and embedding applications can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_record;
    pub mod verdict;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod pseudo_move;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod apply_move;
    pub mod attack;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub mod errors;
