//! Board tiles.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::tables;
use crate::board::types::{Piece, Square};

/// One square of the board together with whatever stands on it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    square: Square,
    piece: Option<Piece>,
}

/// Fixed array of all 64 tiles in index order.
pub(crate) type Tiles = [Tile; tables::NUM_SQUARES];

impl Tile {
    /// Create an empty tile
    #[inline]
    #[must_use]
    pub const fn empty(square: Square) -> Tile {
        Tile {
            square,
            piece: None,
        }
    }

    /// Create a tile occupied by `piece`
    #[inline]
    #[must_use]
    pub const fn occupied(square: Square, piece: Piece) -> Tile {
        Tile {
            square,
            piece: Some(piece),
        }
    }

    /// Get the square this tile covers
    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        self.square
    }

    /// Get the piece standing here, if any
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        self.piece
    }

    /// Returns true if a piece stands here
    #[inline]
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        self.piece.is_some()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.piece {
            Some(piece) => write!(f, "{piece}"),
            None => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{Alliance, PieceKind};

    #[test]
    fn test_tile_occupancy() {
        let square: Square = "d4".parse().unwrap();
        let empty = Tile::empty(square);
        assert!(!empty.is_occupied());
        assert_eq!(empty.piece(), None);
        assert_eq!(empty.to_string(), "-");

        let rook = Piece::new(PieceKind::Rook, Alliance::Black, square);
        let occupied = Tile::occupied(square, rook);
        assert!(occupied.is_occupied());
        assert_eq!(occupied.piece(), Some(rook));
        assert_eq!(occupied.square(), square);
        assert_eq!(occupied.to_string(), "r");
    }
}
