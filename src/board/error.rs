//! Error types for board and game operations.

use std::fmt;

use crate::board::game::GameState;
use crate::board::player::MoveStatus;
use crate::board::types::{Alliance, Square};

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Text is not one of the 64 algebraic labels
    InvalidPosition { notation: String },
    /// Numeric index outside the board (must be 0-63)
    IndexOutOfRange { index: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidPosition { notation } => {
                write!(f, "Invalid position '{notation}'")
            }
            SquareError::IndexOutOfRange { index } => {
                write!(f, "Square index {index} out of range (must be 0-63)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move lookup and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No move of the side to move connects the two squares
    NoSuchMove { from: Square, to: Square },
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoSuchMove { from, to } => {
                write!(f, "No move from {from} to {to} in this position")
            }
            MoveError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for assembling an unbuildable position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Side has no king on the board
    MissingKing { alliance: Alliance },
    /// Side has more than one king on the board
    DuplicateKing { alliance: Alliance },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { alliance } => {
                write!(f, "No {alliance} king on the board")
            }
            BoardError::DuplicateKing { alliance } => {
                write!(f, "More than one {alliance} king on the board")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Invalid rank in position string
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Described position cannot form a board
    Position(BoardError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::Position(err) => {
                write!(f, "FEN describes an invalid position: {err}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::Position(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(err: BoardError) -> Self {
        FenError::Position(err)
    }
}

/// Error type for submitting a move to a finished or rejecting game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    /// Game already ended in the given state
    GameOver { state: GameState },
    /// Board rejected the move with the given status
    Rejected { status: MoveStatus },
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::GameOver { state } => {
                write!(f, "Game is already over: {state}")
            }
            PlayError::Rejected { status } => {
                write!(f, "Move rejected: {status}")
            }
        }
    }
}

impl std::error::Error for PlayError {}
