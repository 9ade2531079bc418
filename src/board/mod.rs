//! Chess board representation and game logic.
//!
//! Boards are immutable snapshots. Applying a move builds the successor
//! position, so histories and search trees can share earlier states freely.
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let board = Board::standard();
//! let moves = board.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod fen;
mod game;
mod movegen;
mod player;
mod state;
pub(crate) mod tables;
mod tile;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, FenError, MoveError, PlayError, SquareError};
pub use game::{Game, GameState};
pub use player::{MoveStatus, MoveTransition, Player};
pub use state::Board;
pub use tile::Tile;
pub use types::{Alliance, CastleSide, Move, MoveKind, Piece, PieceKind, Square};
