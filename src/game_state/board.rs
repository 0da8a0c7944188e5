//! The 8x8 board: pure data plus lookup.
//!
//! One flat array of 64 optional pieces. The array index is the only record
//! of a piece's position, so the at-most-one-piece-per-square and
//! coordinates-agree invariants hold by construction. Castling rights and
//! the en-passant target are derived on demand from the per-piece flags.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// An empty board with no pieces.
    #[inline]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard 32-piece starting layout.
    pub fn standard_setup() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (file, kind) in back_rank.into_iter().enumerate() {
            let file = file as u8;
            board.squares[square_at(file, 0) as usize] = Some(Piece::new(kind, Team::White));
            board.squares[square_at(file, 7) as usize] = Some(Piece::new(kind, Team::Black));
            board.squares[square_at(file, 1) as usize] =
                Some(Piece::new(PieceKind::Pawn, Team::White));
            board.squares[square_at(file, 6) as usize] =
                Some(Piece::new(PieceKind::Pawn, Team::Black));
        }

        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.squares[square as usize].as_mut()
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.squares[square as usize].is_none()
    }

    /// Place a piece, replacing and returning any previous occupant.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square as usize].replace(piece)
    }

    /// Remove and return the occupant of a square, if any.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square as usize].take()
    }

    /// All occupied squares with their pieces.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, piece)| piece.map(|p| (idx as Square, p)))
    }

    /// Occupied squares belonging to one team.
    pub fn squares_of(&self, team: Team) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied_squares()
            .filter(move |(_, piece)| piece.team == team)
    }

    /// Locate a team's king.
    pub fn king_square(&self, team: Team) -> Option<Square> {
        self.squares_of(team)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Castling rights derived from the unmoved-king/unmoved-rook flags.
    pub fn castling_rights(&self) -> CastlingRights {
        let mut rights: CastlingRights = 0;

        for team in [Team::White, Team::Black] {
            let back = team.back_rank();
            let king_home = square_at(4, back);
            let king_unmoved = matches!(
                self.piece_at(king_home),
                Some(piece) if piece.kind == PieceKind::King && piece.team == team && !piece.has_moved
            );
            if !king_unmoved {
                continue;
            }

            let (kingside, queenside) = match team {
                Team::White => (CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE),
                Team::Black => (CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE),
            };
            if self.unmoved_rook_at(square_at(7, back), team) {
                rights |= kingside;
            }
            if self.unmoved_rook_at(square_at(0, back), team) {
                rights |= queenside;
            }
        }

        rights
    }

    fn unmoved_rook_at(&self, square: Square, team: Team) -> bool {
        matches!(
            self.piece_at(square),
            Some(piece) if piece.kind == PieceKind::Rook && piece.team == team && !piece.has_moved
        )
    }

    /// The square a pawn of `by_team` could capture onto en passant, if the
    /// opponent's most recent move was a double push. This is the square the
    /// pushed pawn skipped over, directly behind its current position.
    pub fn en_passant_target(&self, by_team: Team) -> Option<Square> {
        let enemy = by_team.opposite();
        self.squares_of(enemy)
            .find(|(_, piece)| piece.kind == PieceKind::Pawn && piece.just_double_moved)
            .map(|(square, _)| {
                let behind = rank_of(square) as i8 - enemy.pawn_direction();
                square_at(file_of(square), behind as u8)
            })
    }

    /// Clear the double-push marker on every pawn except the one at `keep`.
    pub fn clear_double_move_flags(&mut self, keep: Option<Square>) {
        for idx in 0..64 {
            if Some(idx as Square) == keep {
                continue;
            }
            if let Some(piece) = self.squares[idx].as_mut() {
                if piece.kind == PieceKind::Pawn {
                    piece.just_double_moved = false;
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard_setup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_setup_has_thirty_two_pieces_and_two_kings() {
        let board = Board::standard_setup();
        assert_eq!(board.occupied_squares().count(), 32);
        assert_eq!(board.king_square(Team::White), Some(square_at(4, 0)));
        assert_eq!(board.king_square(Team::Black), Some(square_at(4, 7)));
    }

    #[test]
    fn fresh_setup_grants_all_four_castling_rights() {
        let board = Board::standard_setup();
        let rights = board.castling_rights();
        assert_eq!(
            rights,
            CASTLE_WHITE_KINGSIDE
                | CASTLE_WHITE_QUEENSIDE
                | CASTLE_BLACK_KINGSIDE
                | CASTLE_BLACK_QUEENSIDE
        );
    }

    #[test]
    fn moved_rook_forfeits_its_side_only() {
        let mut board = Board::standard_setup();
        board
            .piece_at_mut(square_at(7, 0))
            .expect("h1 rook present")
            .has_moved = true;
        let rights = board.castling_rights();
        assert_eq!(rights & CASTLE_WHITE_KINGSIDE, 0);
        assert_ne!(rights & CASTLE_WHITE_QUEENSIDE, 0);
    }

    #[test]
    fn en_passant_target_points_behind_double_pushed_pawn() {
        let mut board = Board::empty();
        let mut pawn = Piece::new(PieceKind::Pawn, Team::Black);
        pawn.has_moved = true;
        pawn.just_double_moved = true;
        board.place(square_at(3, 4), pawn); // black pawn on d5 after d7d5
        assert_eq!(
            board.en_passant_target(Team::White),
            Some(square_at(3, 5)) // d6
        );
        assert_eq!(board.en_passant_target(Team::Black), None);
    }
}
