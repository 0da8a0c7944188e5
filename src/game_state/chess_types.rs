//! Core value types shared by every subsystem.
//!
//! Piece identity is a tagged `PieceKind` plus a separate `Team`; per-piece
//! move history lives in two flags on `Piece` rather than in a side table.
//! Squares are flat `0..=63` indices (rank-major, a1 = 0).

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Direction a pawn of this team advances along the rank axis.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Rank on which this team's pawns start.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Team::White => 1,
            Team::Black => 6,
        }
    }

    /// Farthest rank for this team's pawns, where promotion triggers.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Team::White => 7,
            Team::Black => 0,
        }
    }

    /// Rank on which this team's king and rooks start.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Team::White => 0,
            Team::Black => 7,
        }
    }
}

/// Piece kind (team is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Kinds a pawn may promote to.
    #[inline]
    pub const fn is_valid_promotion(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// A single live piece. Its coordinates are the board index it occupies;
/// they are not duplicated here, so piece and square can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub team: Team,
    pub has_moved: bool,
    /// Pawns only: true for exactly the pawn that made the most recent
    /// double push, cleared on every other commit.
    pub just_double_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, team: Team) -> Self {
        Piece {
            kind,
            team,
            has_moved: false,
            just_double_moved: false,
        }
    }
}

/// Board square index (`0..=63`), rank-major: `rank * 8 + file`.
pub type Square = u8;

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

/// Compact castling rights bitmask.
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub type CastlingRights = u8;

/// Overall game classification, re-evaluated after every committed move.
/// Everything except `Playing` and `Paused` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    Checkmate { winner: Team },
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
    MutualDraw,
    Resigned { resigner: Team },
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing | GameStatus::Paused)
    }
}
