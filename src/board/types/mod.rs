//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the crate:
//! - `Alliance`, `PieceKind`, and `Piece` - the sides and their pieces
//! - `Square` - compact board square representation (linear index)
//! - `Move`, `MoveKind`, and `CastleSide` - move representation

mod moves;
mod piece;
mod square;

// Re-export all public types
pub use moves::{CastleSide, Move, MoveKind};
pub use piece::{Alliance, Piece, PieceKind};
pub use square::Square;

// Re-export internal utilities
pub(crate) use piece::PROMOTION_KINDS;
