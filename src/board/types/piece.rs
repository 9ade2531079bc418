//! Piece, kind, and alliance types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::tables;

use super::square::Square;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in material order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a character (either case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Convert piece kind to character with case based on alliance (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, alliance: Alliance) -> char {
        let c = self.to_char();
        if alliance == Alliance::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Get the standard material value in centipawns.
    ///
    /// Returns approximate values: Pawn=100, Knight=320, Bishop=330,
    /// Rook=500, Queen=900, King=20000 (effectively infinite).
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }
}

/// Promotion piece choices in order of typical preference (queen first)
pub(crate) const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// The two sides of a chess game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    /// Both alliances in play order (White=0, Black=1)
    pub const BOTH: [Alliance; 2] = [Alliance::White, Alliance::Black];

    /// Returns the opposing alliance
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Index direction a pawn of this alliance advances in (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn direction(self) -> i16 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    /// First index of this alliance's back rank (a1=56 for White, a8=0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn back_rank_start(self) -> usize {
        match self {
            Alliance::White => 56,
            Alliance::Black => 0,
        }
    }

    /// True iff a pawn of this alliance on `square` has not left its start rank
    #[inline]
    #[must_use]
    pub(crate) fn is_pawn_start(self, square: Square) -> bool {
        match self {
            Alliance::White => tables::RANK_2[square.index()],
            Alliance::Black => tables::RANK_7[square.index()],
        }
    }

    /// True iff `square` is on the promotion rank for this alliance
    #[inline]
    #[must_use]
    pub(crate) fn is_promotion_square(self, square: Square) -> bool {
        match self {
            Alliance::White => tables::RANK_8[square.index()],
            Alliance::Black => tables::RANK_1[square.index()],
        }
    }

    /// True iff a pawn of this alliance may capture en passant from `square`
    #[inline]
    #[must_use]
    pub(crate) fn is_en_passant_rank(self, square: Square) -> bool {
        match self {
            Alliance::White => tables::RANK_5[square.index()],
            Alliance::Black => tables::RANK_4[square.index()],
        }
    }

    /// True iff `square` is where a double step by this alliance's pawn can
    /// be captured en passant
    #[inline]
    #[must_use]
    pub(crate) fn is_en_passant_target(self, square: Square) -> bool {
        match self {
            Alliance::White => tables::RANK_3[square.index()],
            Alliance::Black => tables::RANK_6[square.index()],
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on a square.
///
/// Pieces are plain values; applying a move never mutates one, it produces a
/// successor value on the destination square with the first-move flag spent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    square: Square,
    first_move: bool,
}

impl Piece {
    /// Create a piece that has not moved yet
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, alliance: Alliance, square: Square) -> Piece {
        Piece {
            kind,
            alliance,
            square,
            first_move: true,
        }
    }

    /// Copy of this piece with the first-move flag spent
    #[inline]
    #[must_use]
    pub const fn mark_moved(self) -> Piece {
        Piece {
            first_move: false,
            ..self
        }
    }

    /// Successor value of this piece after moving to `to`
    #[inline]
    #[must_use]
    pub(crate) const fn relocated(self, to: Square) -> Piece {
        Piece {
            square: to,
            first_move: false,
            ..self
        }
    }

    /// Get the piece kind
    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Get the alliance this piece fights for
    #[inline]
    #[must_use]
    pub const fn alliance(self) -> Alliance {
        self.alliance
    }

    /// Get the square this piece stands on
    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        self.square
    }

    /// True iff this piece has never moved
    #[inline]
    #[must_use]
    pub const fn is_first_move(self) -> bool {
        self.first_move
    }

    /// Convert to a FEN character (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self) -> char {
        self.kind.to_fen_char(self.alliance)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}
