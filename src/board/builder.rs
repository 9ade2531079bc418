//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Alliance, BoardBuilder, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece(PieceKind::King, Alliance::White, "e1".parse().unwrap())
//!     .piece(PieceKind::King, Alliance::Black, "e8".parse().unwrap())
//!     .piece(PieceKind::Pawn, Alliance::White, "a2".parse().unwrap())
//!     .side_to_move(Alliance::White)
//!     .build();
//!
//! assert!(!board.legal_moves().is_empty());
//! ```

use crate::board::error::BoardError;
use crate::board::state::Board;
use crate::board::tile::{Tile, Tiles};
use crate::board::types::{Alliance, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    side_to_move: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Alliance::White,
            en_passant_pawn: None,
        }
    }

    /// Create a builder holding the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

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
        for (file, &kind) in back_rank.iter().enumerate() {
            builder.pieces.push(Piece::new(
                kind,
                Alliance::Black,
                Square::from_index(file),
            ));
            builder.pieces.push(Piece::new(
                kind,
                Alliance::White,
                Square::from_index(56 + file),
            ));
        }
        for file in 0..8 {
            builder.pieces.push(Piece::new(
                PieceKind::Pawn,
                Alliance::Black,
                Square::from_index(8 + file),
            ));
            builder.pieces.push(Piece::new(
                PieceKind::Pawn,
                Alliance::White,
                Square::from_index(48 + file),
            ));
        }

        builder
    }

    /// Place a fresh piece (one that has not moved yet) on the board.
    #[must_use]
    pub fn piece(self, kind: PieceKind, alliance: Alliance, square: Square) -> Self {
        self.place(Piece::new(kind, alliance, square))
    }

    /// Place an exact piece value, move history included.
    #[must_use]
    pub fn place(mut self, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|p| p.square() != piece.square());
        self.pieces.push(piece);
        self
    }

    /// Remove whatever stands on a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square() != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, alliance: Alliance) -> Self {
        self.side_to_move = alliance;
        self
    }

    /// Record the pawn that just made a double step and may be captured en
    /// passant.
    #[must_use]
    pub const fn en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Build the board, validating the position.
    ///
    /// # Errors
    /// Returns an error unless each side has exactly one king.
    pub fn try_build(self) -> Result<Board, BoardError> {
        let mut placed: [Option<Piece>; Square::COUNT] = [None; Square::COUNT];
        for piece in &self.pieces {
            placed[piece.square().index()] = Some(*piece);
        }
        let tiles: Tiles = std::array::from_fn(|idx| {
            let square = Square::from_index(idx);
            match placed[idx] {
                Some(piece) => Tile::occupied(square, piece),
                None => Tile::empty(square),
            }
        });
        Board::from_parts(tiles, self.side_to_move, self.en_passant_pawn)
    }

    /// Build the board.
    ///
    /// # Panics
    /// Panics unless each side has exactly one king. Use
    /// [`try_build`](Self::try_build) to handle that as an error instead.
    #[must_use]
    pub fn build(self) -> Board {
        self.try_build().expect("Invalid position")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        let standard = Board::standard();

        assert_eq!(built, standard);
        assert_eq!(built.to_fen(), standard.to_fen());
    }

    #[test]
    fn test_kings_only_board() {
        let board = BoardBuilder::new()
            .piece(PieceKind::King, Alliance::White, "e1".parse().unwrap())
            .piece(PieceKind::King, Alliance::Black, "e8".parse().unwrap())
            .build();

        assert!(board.tile("e1".parse().unwrap()).is_occupied());
        assert!(board.tile("e8".parse().unwrap()).is_occupied());
        assert!(!board.tile("a1".parse().unwrap()).is_occupied());
    }

    #[test]
    fn test_missing_king_is_rejected() {
        let result = BoardBuilder::new()
            .piece(PieceKind::King, Alliance::White, "e1".parse().unwrap())
            .try_build();

        assert_eq!(
            result.unwrap_err(),
            BoardError::MissingKing {
                alliance: Alliance::Black
            }
        );
    }

    #[test]
    fn test_duplicate_king_is_rejected() {
        let result = BoardBuilder::new()
            .piece(PieceKind::King, Alliance::White, "e1".parse().unwrap())
            .piece(PieceKind::King, Alliance::White, "d1".parse().unwrap())
            .piece(PieceKind::King, Alliance::Black, "e8".parse().unwrap())
            .try_build();

        assert_eq!(
            result.unwrap_err(),
            BoardError::DuplicateKing {
                alliance: Alliance::White
            }
        );
    }

    #[test]
    fn test_side_to_move() {
        let board = BoardBuilder::new()
            .piece(PieceKind::King, Alliance::White, "e1".parse().unwrap())
            .piece(PieceKind::King, Alliance::Black, "e8".parse().unwrap())
            .side_to_move(Alliance::Black)
            .build();

        assert_eq!(board.side_to_move(), Alliance::Black);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear("a1".parse().unwrap())
            .build();

        assert!(!board.tile("a1".parse().unwrap()).is_occupied());
        assert!(board.tile("b1".parse().unwrap()).is_occupied());
    }

    #[test]
    fn test_place_overwrites() {
        let square: Square = "e4".parse().unwrap();
        let board = BoardBuilder::new()
            .piece(PieceKind::King, Alliance::White, "e1".parse().unwrap())
            .piece(PieceKind::King, Alliance::Black, "e8".parse().unwrap())
            .piece(PieceKind::Knight, Alliance::White, square)
            .piece(PieceKind::Queen, Alliance::Black, square)
            .build();

        let piece = board.tile(square).piece().unwrap();
        assert_eq!(piece.kind(), PieceKind::Queen);
        assert_eq!(piece.alliance(), Alliance::Black);
    }
}
