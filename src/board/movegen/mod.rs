//! Pseudo-legal move generation.
//!
//! Each submodule covers one movement family. Offsets are applied to the
//! linear square index, so every step first consults the file membership
//! tables to rule out wrapping across a board edge.

mod kings;
mod knights;
mod pawns;
mod sliders;

use crate::board::tile::Tiles;
use crate::board::types::{Alliance, Move, Piece, PieceKind};

/// Pseudo-legal moves of one piece: every square its movement pattern
/// reaches, ignoring whether the mover's own king is left attacked.
pub(crate) fn piece_moves(
    tiles: &Tiles,
    en_passant_pawn: Option<Piece>,
    piece: Piece,
) -> Vec<Move> {
    match piece.kind() {
        PieceKind::Pawn => pawns::moves(tiles, en_passant_pawn, piece),
        PieceKind::Knight => knights::moves(tiles, piece),
        PieceKind::Bishop => sliders::moves(tiles, piece, &sliders::BISHOP_VECTORS),
        PieceKind::Rook => sliders::moves(tiles, piece, &sliders::ROOK_VECTORS),
        PieceKind::Queen => sliders::moves(tiles, piece, &sliders::QUEEN_VECTORS),
        PieceKind::King => kings::moves(tiles, piece),
    }
}

/// Pseudo-legal moves of every piece of one alliance, castles not included.
pub(crate) fn alliance_moves(
    tiles: &Tiles,
    en_passant_pawn: Option<Piece>,
    alliance: Alliance,
) -> Vec<Move> {
    let mut moves = Vec::new();
    for tile in tiles.iter() {
        if let Some(piece) = tile.piece() {
            if piece.alliance() == alliance {
                moves.extend(piece_moves(tiles, en_passant_pawn, piece));
            }
        }
    }
    moves
}
