//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// The two wings a king can castle toward.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// What a move does beyond relocating its piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Plain relocation to an empty square
    Normal,
    /// Pawn double step from its start rank
    PawnJump,
    /// Capture of the piece on the destination square
    Attack { captured: Piece },
    /// En passant capture; the captured pawn is not on the destination square
    EnPassant { captured: Piece },
    /// Pawn reaching the far rank, replaced by the chosen kind
    Promotion {
        promoted_to: PieceKind,
        captured: Option<Piece>,
    },
    /// King and rook move together
    Castle {
        side: CastleSide,
        rook: Piece,
        rook_to: Square,
    },
}

/// A move of one piece, described richly enough to replay it.
///
/// Two moves are equal when the same piece travels between the same squares
/// the same way. The stored piece is the value before the move, still on its
/// source square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    piece: Piece,
    to: Square,
    kind: MoveKind,
}

impl Move {
    /// Create a quiet move to an empty square
    #[inline]
    #[must_use]
    pub const fn normal(piece: Piece, to: Square) -> Self {
        Move {
            piece,
            to,
            kind: MoveKind::Normal,
        }
    }

    /// Create a capture of the piece on the destination square
    #[inline]
    #[must_use]
    pub const fn attack(piece: Piece, to: Square, captured: Piece) -> Self {
        Move {
            piece,
            to,
            kind: MoveKind::Attack { captured },
        }
    }

    /// Create a pawn double step
    #[inline]
    #[must_use]
    pub const fn pawn_jump(piece: Piece, to: Square) -> Self {
        Move {
            piece,
            to,
            kind: MoveKind::PawnJump,
        }
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(piece: Piece, to: Square, captured: Piece) -> Self {
        Move {
            piece,
            to,
            kind: MoveKind::EnPassant { captured },
        }
    }

    /// Create a promotion, capturing or not
    #[inline]
    #[must_use]
    pub const fn promotion(
        piece: Piece,
        to: Square,
        promoted_to: PieceKind,
        captured: Option<Piece>,
    ) -> Self {
        Move {
            piece,
            to,
            kind: MoveKind::Promotion {
                promoted_to,
                captured,
            },
        }
    }

    /// Create a castle; `to` is the king's destination
    #[inline]
    #[must_use]
    pub const fn castle(king: Piece, to: Square, side: CastleSide, rook: Piece, rook_to: Square) -> Self {
        Move {
            piece: king,
            to,
            kind: MoveKind::Castle { side, rook, rook_to },
        }
    }

    /// Get the moving piece as it stands before the move
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.piece.square()
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get what the move does
    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Get the captured piece, if any (en passant included)
    #[inline]
    #[must_use]
    pub const fn captured_piece(self) -> Option<Piece> {
        match self.kind {
            MoveKind::Attack { captured } | MoveKind::EnPassant { captured } => Some(captured),
            MoveKind::Promotion { captured, .. } => captured,
            _ => None,
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_attack(self) -> bool {
        self.captured_piece().is_some()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant { .. })
    }

    /// Returns true if this move is a pawn double step
    #[inline]
    #[must_use]
    pub const fn is_pawn_jump(self) -> bool {
        matches!(self.kind, MoveKind::PawnJump)
    }

    /// Returns true if this move is castling (either wing)
    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_kingside_castle(self) -> bool {
        matches!(
            self.kind,
            MoveKind::Castle {
                side: CastleSide::KingSide,
                ..
            }
        )
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub const fn is_queenside_castle(self) -> bool {
        matches!(
            self.kind,
            MoveKind::Castle {
                side: CastleSide::QueenSide,
                ..
            }
        )
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion { .. })
    }

    /// Get the kind the pawn becomes, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promoted_to(self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { promoted_to, .. } => Some(promoted_to),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promoted_to() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}{}", self.piece.to_fen_char(), self.from(), self.to())?;
        if let Some(promo) = self.promoted_to() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_attack() {
            write!(f, " cap")?;
        }
        if self.is_castle() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}
