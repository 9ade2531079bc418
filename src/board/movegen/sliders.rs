//! Sliding piece move generation for bishops, rooks, and queens.

use crate::board::tables;
use crate::board::tile::Tiles;
use crate::board::types::{Move, Piece, Square};

pub(crate) const BISHOP_VECTORS: [i16; 4] = [-9, -7, 7, 9];
pub(crate) const ROOK_VECTORS: [i16; 4] = [-8, -1, 1, 8];
pub(crate) const QUEEN_VECTORS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Walk each ray until it is blocked or leaves the board. A blocking enemy
/// piece is captured; a friendly one ends the ray without a move.
pub(crate) fn moves(tiles: &Tiles, piece: Piece, vectors: &[i16]) -> Vec<Move> {
    let mut moves = Vec::new();

    for &vector in vectors {
        let mut current = piece.square();
        loop {
            if wraps_edge(current, vector) {
                break;
            }
            let Some(next) = current.offset(vector) else {
                break;
            };
            match tiles[next.index()].piece() {
                None => {
                    moves.push(Move::normal(piece, next));
                    current = next;
                }
                Some(other) => {
                    if other.alliance() != piece.alliance() {
                        moves.push(Move::attack(piece, next, other));
                    }
                    break;
                }
            }
        }
    }

    moves
}

/// Rays with a westward component end on the a-file, eastward ones on the
/// h-file; checked before stepping so a ray never wraps to the far side.
fn wraps_edge(current: Square, vector: i16) -> bool {
    let idx = current.index();
    (tables::FILE_A[idx] && matches!(vector, -9 | -1 | 7))
        || (tables::FILE_H[idx] && matches!(vector, -7 | 1 | 9))
}
