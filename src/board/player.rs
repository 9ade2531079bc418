//! Players and move submission results.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::BoardError;
use crate::board::movegen;
use crate::board::state::Board;
use crate::board::tile::Tiles;
use crate::board::types::{Alliance, CastleSide, Move, Piece, PieceKind, Square};

/// Outcome of asking a board to play a move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveStatus {
    /// The move was played and produced a new board
    Done,
    /// The move is not one the side to move can make
    IllegalMove,
    /// The move is shaped correctly but would leave the own king attacked
    LeavesPlayerInCheck,
}

impl MoveStatus {
    /// Returns true if the move was played
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done"),
            MoveStatus::IllegalMove => write!(f, "illegal move"),
            MoveStatus::LeavesPlayerInCheck => write!(f, "leaves player in check"),
        }
    }
}

/// Result of submitting a move: the status, and on success the board the
/// move produced. The board the move was submitted to is untouched either
/// way.
#[derive(Clone, Debug)]
pub struct MoveTransition {
    status: MoveStatus,
    board: Option<Board>,
}

impl MoveTransition {
    pub(crate) fn done(board: Board) -> Self {
        MoveTransition {
            status: MoveStatus::Done,
            board: Some(board),
        }
    }

    pub(crate) fn failed(status: MoveStatus) -> Self {
        MoveTransition {
            status,
            board: None,
        }
    }

    /// Get the status of the submission
    #[inline]
    #[must_use]
    pub const fn status(&self) -> MoveStatus {
        self.status
    }

    /// Returns true if the move was played
    #[inline]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// Get the board the move produced, if it was played
    #[inline]
    #[must_use]
    pub const fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Consume the transition, keeping the board the move produced
    #[inline]
    #[must_use]
    pub fn into_board(self) -> Option<Board> {
        self.board
    }
}

/// One side's standing in a position: where its king is, every move its
/// pieces can make (castles included), and whether the king is attacked.
///
/// A player is computed when its board is built and never changes afterward.
#[derive(Clone, Debug)]
pub struct Player {
    alliance: Alliance,
    king: Piece,
    moves: Vec<Move>,
    in_check: bool,
}

impl Player {
    /// Compute both players of a position in one pass.
    ///
    /// Castle availability for each side depends on the other side's piece
    /// moves, so the pair is always built together over the same move sets.
    pub(crate) fn build_pair(
        tiles: &Tiles,
        en_passant_pawn: Option<Piece>,
    ) -> Result<(Player, Player), BoardError> {
        let white_king = find_king(tiles, Alliance::White)?;
        let black_king = find_king(tiles, Alliance::Black)?;

        let white_piece_moves = movegen::alliance_moves(tiles, en_passant_pawn, Alliance::White);
        let black_piece_moves = movegen::alliance_moves(tiles, en_passant_pawn, Alliance::Black);

        let white_in_check = is_attacked(white_king.square(), &black_piece_moves);
        let black_in_check = is_attacked(black_king.square(), &white_piece_moves);

        let white_castles = castles(tiles, white_king, white_in_check, &black_piece_moves);
        let black_castles = castles(tiles, black_king, black_in_check, &white_piece_moves);

        let mut white_moves = white_piece_moves;
        white_moves.extend(white_castles);
        let mut black_moves = black_piece_moves;
        black_moves.extend(black_castles);

        Ok((
            Player {
                alliance: Alliance::White,
                king: white_king,
                moves: white_moves,
                in_check: white_in_check,
            },
            Player {
                alliance: Alliance::Black,
                king: black_king,
                moves: black_moves,
                in_check: black_in_check,
            },
        ))
    }

    /// Get the alliance this player fights for
    #[inline]
    #[must_use]
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// Get this player's king
    #[inline]
    #[must_use]
    pub const fn king(&self) -> Piece {
        self.king
    }

    /// Every move this player's pieces can make, castles included.
    ///
    /// Moves that would expose the own king are still listed here; the board
    /// rejects them with [`MoveStatus::LeavesPlayerInCheck`] when submitted.
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if this player's king is attacked
    #[inline]
    #[must_use]
    pub const fn is_in_check(&self) -> bool {
        self.in_check
    }
}

/// The one king of an alliance on the board.
fn find_king(tiles: &Tiles, alliance: Alliance) -> Result<Piece, BoardError> {
    let mut king = None;
    for tile in tiles.iter() {
        if let Some(piece) = tile.piece() {
            if piece.alliance() == alliance && piece.kind() == PieceKind::King {
                if king.is_some() {
                    return Err(BoardError::DuplicateKing { alliance });
                }
                king = Some(piece);
            }
        }
    }
    king.ok_or(BoardError::MissingKing { alliance })
}

/// True iff any of the given moves lands on `square`.
fn is_attacked(square: Square, moves: &[Move]) -> bool {
    moves.iter().any(|mv| mv.to() == square)
}

/// Castle moves currently available to the king.
///
/// The king and rook must both carry an unspent first-move flag and stand on
/// their home squares, the path between them must be clear, and no square
/// the king crosses or lands on may be attacked. On the queenside the b
/// square must be empty but may be attacked; the king never crosses it.
fn castles(tiles: &Tiles, king: Piece, in_check: bool, opponent_moves: &[Move]) -> Vec<Move> {
    let mut castles = Vec::new();
    let alliance = king.alliance();
    let back = alliance.back_rank_start();

    if !king.is_first_move() || in_check || king.square().index() != back + 4 {
        return castles;
    }

    let f = Square::from_index(back + 5);
    let g = Square::from_index(back + 6);
    if !tiles[f.index()].is_occupied()
        && !tiles[g.index()].is_occupied()
        && !is_attacked(f, opponent_moves)
        && !is_attacked(g, opponent_moves)
    {
        if let Some(rook) = home_rook(tiles, alliance, back + 7) {
            castles.push(Move::castle(king, g, CastleSide::KingSide, rook, f));
        }
    }

    let b = Square::from_index(back + 1);
    let c = Square::from_index(back + 2);
    let d = Square::from_index(back + 3);
    if !tiles[b.index()].is_occupied()
        && !tiles[c.index()].is_occupied()
        && !tiles[d.index()].is_occupied()
        && !is_attacked(c, opponent_moves)
        && !is_attacked(d, opponent_moves)
    {
        if let Some(rook) = home_rook(tiles, alliance, back) {
            castles.push(Move::castle(king, c, CastleSide::QueenSide, rook, d));
        }
    }

    castles
}

/// The alliance's never-moved rook on the given corner, if it is still there.
fn home_rook(tiles: &Tiles, alliance: Alliance, corner: usize) -> Option<Piece> {
    let piece = tiles[corner].piece()?;
    (piece.kind() == PieceKind::Rook && piece.alliance() == alliance && piece.is_first_move())
        .then_some(piece)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_players() {
        let board = Board::standard();
        let white = board.player(Alliance::White);
        let black = board.player(Alliance::Black);

        assert_eq!(white.alliance(), Alliance::White);
        assert_eq!(black.alliance(), Alliance::Black);
        assert_eq!(white.king().square(), "e1".parse().unwrap());
        assert_eq!(black.king().square(), "e8".parse().unwrap());
        assert!(!white.is_in_check());
        assert!(!black.is_in_check());
        assert_eq!(white.moves().len(), 20);
        assert_eq!(black.moves().len(), 20);
    }

    #[test]
    fn test_move_transition_accessors() {
        let board = Board::standard();
        let mv = board.find_move("e2".parse().unwrap(), "e4".parse().unwrap()).unwrap();
        let transition = board.make_move(&mv);

        assert!(transition.is_done());
        assert_eq!(transition.status(), MoveStatus::Done);
        assert!(transition.board().is_some());
        assert!(transition.into_board().is_some());

        let failed = MoveTransition::failed(MoveStatus::IllegalMove);
        assert!(!failed.is_done());
        assert!(failed.board().is_none());
    }

    #[test]
    fn test_move_status_display() {
        assert_eq!(MoveStatus::Done.to_string(), "done");
        assert_eq!(MoveStatus::IllegalMove.to_string(), "illegal move");
        assert_eq!(
            MoveStatus::LeavesPlayerInCheck.to_string(),
            "leaves player in check"
        );
    }
}
