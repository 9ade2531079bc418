//! The immutable board and move application.

use std::fmt;

use crate::board::builder::BoardBuilder;
use crate::board::error::{BoardError, MoveError};
use crate::board::player::{MoveStatus, MoveTransition, Player};
use crate::board::tile::{Tile, Tiles};
use crate::board::types::{Alliance, Move, MoveKind, Piece, PieceKind, Square};

/// A chess position frozen at one turn.
///
/// A board never changes once built. Playing a move produces a fresh board
/// and leaves the original intact, so callers may keep any number of past
/// positions alive and read them from any thread.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Tiles,
    to_move: Alliance,
    en_passant_pawn: Option<Piece>,
    white: Player,
    black: Player,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn standard() -> Board {
        BoardBuilder::starting_position().build()
    }

    /// Assemble a board from its raw parts, computing both players.
    pub(crate) fn from_parts(
        tiles: Tiles,
        to_move: Alliance,
        en_passant_pawn: Option<Piece>,
    ) -> Result<Board, BoardError> {
        let (white, black) = Player::build_pair(&tiles, en_passant_pawn)?;
        Ok(Board {
            tiles,
            to_move,
            en_passant_pawn,
            white,
            black,
        })
    }

    /// Get the tile covering a square
    #[inline]
    #[must_use]
    pub fn tile(&self, square: Square) -> Tile {
        self.tiles[square.index()]
    }

    /// Get the piece standing on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.tiles[square.index()].piece()
    }

    /// All 64 tiles in index order (a8 first, h1 last)
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile; Square::COUNT] {
        &self.tiles
    }

    /// Get the alliance whose turn it is
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Alliance {
        self.to_move
    }

    /// The pawn that just made a double step and may be captured en passant
    #[inline]
    #[must_use]
    pub const fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// Get one side's player
    #[must_use]
    pub const fn player(&self, alliance: Alliance) -> &Player {
        match alliance {
            Alliance::White => &self.white,
            Alliance::Black => &self.black,
        }
    }

    /// Get the player whose turn it is
    #[must_use]
    pub const fn current_player(&self) -> &Player {
        self.player(self.to_move)
    }

    /// Get the player waiting for their turn
    #[must_use]
    pub const fn opponent_player(&self) -> &Player {
        self.player(self.to_move.opponent())
    }

    /// Iterate over one side's pieces
    pub fn pieces(&self, alliance: Alliance) -> impl Iterator<Item = Piece> + '_ {
        self.tiles
            .iter()
            .filter_map(|tile| tile.piece())
            .filter(move |piece| piece.alliance() == alliance)
    }

    /// Play a move against this board.
    ///
    /// A move that is not among the current player's moves comes back as
    /// [`MoveStatus::IllegalMove`]; one that is but would leave the mover's
    /// king attacked comes back as [`MoveStatus::LeavesPlayerInCheck`].
    /// Either way this board is untouched.
    #[must_use]
    pub fn make_move(&self, mv: &Move) -> MoveTransition {
        if !self.current_player().moves().contains(mv) {
            return MoveTransition::failed(MoveStatus::IllegalMove);
        }
        // hand-built positions can leave a king standing en prise; taking
        // one is never a chess move
        if mv.captured_piece().map(Piece::kind) == Some(PieceKind::King) {
            return MoveTransition::failed(MoveStatus::IllegalMove);
        }

        let next = self.apply(mv);
        if next.player(self.to_move).is_in_check() {
            return MoveTransition::failed(MoveStatus::LeavesPlayerInCheck);
        }
        MoveTransition::done(next)
    }

    /// Moves of the side to move that can actually be played.
    ///
    /// This is the pseudo-legal set of [`Player::moves`] with every move
    /// filtered out that [`make_move`](Self::make_move) would reject.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.current_player()
            .moves()
            .iter()
            .filter(|mv| self.make_move(mv).is_done())
            .copied()
            .collect()
    }

    /// Look up the current player's move between two squares.
    ///
    /// When several moves connect the pair, which only promotions do, the
    /// queen promotion is preferred; use
    /// [`find_promotion`](Self::find_promotion) to pick another kind.
    ///
    /// # Errors
    /// Fails with [`MoveError::NoSuchMove`] when no move of the side to move
    /// connects the two squares.
    pub fn find_move(&self, from: Square, to: Square) -> Result<Move, MoveError> {
        let mut fallback = None;
        for mv in self.current_player().moves() {
            if mv.from() != from || mv.to() != to {
                continue;
            }
            match mv.promoted_to() {
                None | Some(PieceKind::Queen) => return Ok(*mv),
                Some(_) => fallback = Some(*mv),
            }
        }
        fallback.ok_or(MoveError::NoSuchMove { from, to })
    }

    /// Look up a promotion move, choosing what the pawn becomes.
    ///
    /// # Errors
    /// Fails with [`MoveError::NoSuchMove`] when the squares are not
    /// connected by a promotion to `kind`.
    pub fn find_promotion(
        &self,
        from: Square,
        to: Square,
        kind: PieceKind,
    ) -> Result<Move, MoveError> {
        self.current_player()
            .moves()
            .iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promoted_to() == Some(kind))
            .copied()
            .ok_or(MoveError::NoSuchMove { from, to })
    }

    /// Returns true if the side to move is in check
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.current_player().is_in_check()
    }

    /// Returns true if the side to move is checkmated
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_escape()
    }

    /// Returns true if the side to move has no playable move but is not in
    /// check
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_escape()
    }

    fn has_escape(&self) -> bool {
        self.current_player()
            .moves()
            .iter()
            .any(|mv| self.make_move(mv).is_done())
    }

    /// Count the positions reachable in exactly `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut nodes = 0;
        for mv in self.current_player().moves() {
            if let Some(next) = self.make_move(mv).into_board() {
                nodes += if depth == 1 { 1 } else { next.perft(depth - 1) };
            }
        }
        nodes
    }

    /// Rebuild the position with the move carried out.
    ///
    /// Callers must pass a move from the current player's set that does not
    /// capture a king; `make_move` checks both.
    fn apply(&self, mv: &Move) -> Board {
        let mover = mv.piece();
        let captured = mv.captured_piece();
        // on a castle the rook relocates too and must not be copied over
        let castle_rook = match mv.kind() {
            MoveKind::Castle { rook, .. } => Some(rook),
            _ => None,
        };
        let mut builder = BoardBuilder::new();

        for tile in self.tiles.iter() {
            let Some(piece) = tile.piece() else {
                continue;
            };
            if piece == mover || Some(piece) == captured || Some(piece) == castle_rook {
                continue;
            }
            builder = builder.place(piece);
        }

        builder = match mv.kind() {
            MoveKind::Promotion { promoted_to, .. } => builder.place(
                Piece::new(promoted_to, mover.alliance(), mv.to()).mark_moved(),
            ),
            MoveKind::Castle { rook, rook_to, .. } => builder
                .place(mover.relocated(mv.to()))
                .place(rook.relocated(rook_to)),
            _ => builder.place(mover.relocated(mv.to())),
        };

        if mv.is_pawn_jump() {
            builder = builder.en_passant_pawn(mover.relocated(mv.to()));
        }

        builder
            .side_to_move(self.to_move.opponent())
            .try_build()
            .expect("applying a move keeps both kings on the board")
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

// Players are derived from the tiles, the turn, and the en passant pawn, so
// equality over those three fields is equality of positions.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
            && self.to_move == other.to_move
            && self.en_passant_pawn == other.en_passant_pawn
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, tile) in self.tiles.iter().enumerate() {
            write!(f, "{:>3}", tile.to_string())?;
            if (idx + 1) % 8 == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
