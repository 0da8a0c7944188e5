//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position string and the draw-rule thresholds used by the
//! terminal-state evaluator.

/// Standard chess starting position in the six-field position format.
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-moves since the last capture or pawn move at which the fifty-move
/// rule fires (fifty full moves by each side).
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

/// How many recent position keys are retained for repetition detection.
/// Nine half-moves is enough to see the third occurrence of a position in a
/// null-progress shuffle cycle (occurrences at half-moves 0, 4, and 8).
pub const REPETITION_WINDOW: usize = 9;

/// Occurrences of the same position key that constitute a repetition draw.
pub const REPETITION_LIMIT: usize = 3;
