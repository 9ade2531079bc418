//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;
use crate::board::tables;

/// A square on the chess board, stored as a linear index.
///
/// Index 0 is a8, counting continues along each rank to index 7 at h8, then
/// rank by rank toward White until index 63 at h1. Adding 8 to an index
/// therefore moves one rank closer to White's side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board
    pub const COUNT: usize = tables::NUM_SQUARES;

    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < tables::NUM_SQUARES {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Create a square from an index already known to be in [0,64)
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < tables::NUM_SQUARES);
        Square(index as u8)
    }

    /// Get the square's linear index (a8=0, h8=7, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0 as usize % tables::SQUARES_PER_RANK
    }

    /// Get the chess rank (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        tables::SQUARES_PER_RANK - self.0 as usize / tables::SQUARES_PER_RANK
    }

    /// Step by a signed index offset, or `None` when that leaves the board.
    ///
    /// This only checks the linear bounds; callers stepping sideways must
    /// rule out file wraparound themselves.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: i16) -> Option<Self> {
        let index = self.0 as i16 + delta;
        if tables::is_valid_index(index) {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Get the algebraic label for this square
    #[inline]
    #[must_use]
    pub fn notation(self) -> &'static str {
        tables::label_of(self.index())
    }

    /// Iterate over all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..tables::NUM_SQUARES).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.notation())
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::IndexOutOfRange { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match tables::index_at(s) {
            Some(index) => Ok(Square(index)),
            None => Err(SquareError::InvalidPosition {
                notation: s.to_string(),
            }),
        }
    }
}
