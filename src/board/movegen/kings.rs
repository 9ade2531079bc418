//! King move generation.
//!
//! Only the single-step moves live here; castling needs the opponent's move
//! set and is worked out during player construction.

use crate::board::tables;
use crate::board::tile::Tiles;
use crate::board::types::{Move, Piece, Square};

const OFFSETS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub(crate) fn moves(tiles: &Tiles, king: Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    let from = king.square();

    for offset in OFFSETS {
        if wraps_edge(from, offset) {
            continue;
        }
        let Some(to) = from.offset(offset) else {
            continue;
        };
        match tiles[to.index()].piece() {
            None => moves.push(Move::normal(king, to)),
            Some(other) if other.alliance() != king.alliance() => {
                moves.push(Move::attack(king, to, other));
            }
            Some(_) => {}
        }
    }

    moves
}

/// Offsets stepping west wrap from the a-file, those stepping east wrap from
/// the h-file.
fn wraps_edge(from: Square, offset: i16) -> bool {
    let idx = from.index();
    (tables::FILE_A[idx] && matches!(offset, -9 | -1 | 7))
        || (tables::FILE_H[idx] && matches!(offset, -7 | 1 | 9))
}
