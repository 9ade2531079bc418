//! FEN parsing and formatting, and coordinate move notation.

use std::str::FromStr;

use crate::board::builder::BoardBuilder;
use crate::board::error::{FenError, MoveError};
use crate::board::state::Board;
use crate::board::types::{Alliance, Move, Piece, PieceKind, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The castling field decides which kings and rooks still carry their
    /// first-move flag; pawns keep theirs while standing on their start
    /// rank. Fields past the en passant square are accepted and ignored.
    ///
    /// # Errors
    /// Returns an error if the FEN string is invalid or describes a
    /// position without exactly one king per side.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let side_to_move = match parts[1] {
            "w" => Alliance::White,
            "b" => Alliance::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut white_kingside = false;
        let mut white_queenside = false;
        let mut black_kingside = false;
        let mut black_queenside = false;
        for c in parts[2].chars() {
            match c {
                'K' => white_kingside = true,
                'Q' => white_queenside = true,
                'k' => black_kingside = true,
                'q' => black_queenside = true,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let with_history = |kind: PieceKind, alliance: Alliance, square: Square| -> Piece {
            let first_move = match kind {
                PieceKind::Pawn => alliance.is_pawn_start(square),
                PieceKind::King => match alliance {
                    Alliance::White => white_kingside || white_queenside,
                    Alliance::Black => black_kingside || black_queenside,
                },
                PieceKind::Rook => match (alliance, square.index()) {
                    (Alliance::White, 63) => white_kingside,
                    (Alliance::White, 56) => white_queenside,
                    (Alliance::Black, 7) => black_kingside,
                    (Alliance::Black, 0) => black_queenside,
                    _ => false,
                },
                _ => false,
            };
            let piece = Piece::new(kind, alliance, square);
            if first_move {
                piece
            } else {
                piece.mark_moved()
            }
        };

        // ranks arrive top-down, which is exactly index order
        let mut pieces: Vec<Piece> = Vec::new();
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let kind =
                        PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let alliance = if c.is_uppercase() {
                        Alliance::White
                    } else {
                        Alliance::Black
                    };
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    let square = Square::from_index(rank_idx * 8 + file);
                    pieces.push(with_history(kind, alliance, square));
                    file += 1;
                }
            }
        }

        let en_passant_pawn = if parts[3] == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let target: Square = parts[3].parse().map_err(|_| invalid())?;
            // the pawn that jumped stands one step beyond the capturable
            // square, from the perspective of the side that just moved
            let jumper = side_to_move.opponent();
            if !jumper.is_en_passant_target(target) {
                return Err(invalid());
            }
            let pawn_square = target.offset(8 * jumper.direction()).ok_or_else(invalid)?;
            let pawn = pieces
                .iter()
                .copied()
                .find(|p| {
                    p.square() == pawn_square
                        && p.kind() == PieceKind::Pawn
                        && p.alliance() == jumper
                })
                .ok_or_else(invalid)?;
            Some(pawn)
        };

        let mut builder = BoardBuilder::new().side_to_move(side_to_move);
        for piece in pieces {
            builder = builder.place(piece);
        }
        if let Some(pawn) = en_passant_pawn {
            builder = builder.en_passant_pawn(pawn);
        }
        Ok(builder.try_build()?)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    ///
    /// The halfmove clock and move number are not tracked and come out as
    /// `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in 0..8 {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.tiles()[rank * 8 + file].piece() {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move() {
            Alliance::White => "w",
            Alliance::Black => "b",
        };

        let mut castling = String::new();
        if castle_right(self, Alliance::White, true) {
            castling.push('K');
        }
        if castle_right(self, Alliance::White, false) {
            castling.push('Q');
        }
        if castle_right(self, Alliance::Black, true) {
            castling.push('k');
        }
        if castle_right(self, Alliance::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = match self.en_passant_pawn() {
            Some(pawn) => {
                // the capturable square lies behind the jumped pawn
                match pawn.square().offset(-8 * pawn.alliance().direction()) {
                    Some(square) => square.to_string(),
                    None => "-".to_string(),
                }
            }
            None => "-".to_string(),
        };

        format!("{} {active} {castling} {ep} 0 1", rows.join("/"))
    }

    /// Parse a move in coordinate notation (e.g. "e2e4", "e7e8q") against
    /// this position.
    ///
    /// # Errors
    /// Fails with [`MoveError::NoSuchMove`] when the notation is well formed
    /// but no move of the side to move connects the squares.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let board = Board::standard();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveError::InvalidLength { len: chars.len() });
        }

        let invalid_square = || MoveError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = String::from_iter(&chars[0..2])
            .parse()
            .map_err(|_| invalid_square())?;
        let to: Square = String::from_iter(&chars[2..4])
            .parse()
            .map_err(|_| invalid_square())?;

        if chars.len() == 5 {
            let kind = PieceKind::from_char(chars[4])
                .ok_or(MoveError::InvalidPromotion { char: chars[4] })?;
            if matches!(kind, PieceKind::Pawn | PieceKind::King) {
                return Err(MoveError::InvalidPromotion { char: chars[4] });
            }
            self.find_promotion(from, to, kind)
        } else {
            self.find_move(from, to)
        }
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

/// A side keeps a castling right while its king and the wing's rook both
/// stand on their home squares with unspent first-move flags.
fn castle_right(board: &Board, alliance: Alliance, kingside: bool) -> bool {
    let back = alliance.back_rank_start();
    let king_ok = matches!(
        board.piece_at(Square::from_index(back + 4)),
        Some(p) if p.kind() == PieceKind::King && p.alliance() == alliance && p.is_first_move()
    );
    if !king_ok {
        return false;
    }
    let corner = if kingside { back + 7 } else { back };
    matches!(
        board.piece_at(Square::from_index(corner)),
        Some(p) if p.kind() == PieceKind::Rook && p.alliance() == alliance && p.is_first_move()
    )
}
