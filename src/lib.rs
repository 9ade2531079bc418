pub mod board;

pub use board::{
    Alliance, Board, BoardBuilder, Game, GameState, Move, MoveStatus, MoveTransition, Piece,
    PieceKind, Square,
};
