//! Knight move generation.

use crate::board::tables;
use crate::board::tile::Tiles;
use crate::board::types::{Move, Piece, Square};

const OFFSETS: [i16; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub(crate) fn moves(tiles: &Tiles, knight: Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    let from = knight.square();

    for offset in OFFSETS {
        if wraps_edge(from, offset) {
            continue;
        }
        let Some(to) = from.offset(offset) else {
            continue;
        };
        match tiles[to.index()].piece() {
            None => moves.push(Move::normal(knight, to)),
            Some(other) if other.alliance() != knight.alliance() => {
                moves.push(Move::attack(knight, to, other));
            }
            Some(_) => {}
        }
    }

    moves
}

/// Offsets whose two-file component would carry the jump across a board edge
/// from the given square.
fn wraps_edge(from: Square, offset: i16) -> bool {
    let idx = from.index();
    (tables::FILE_A[idx] && matches!(offset, -17 | -10 | 6 | 15))
        || (tables::FILE_B[idx] && matches!(offset, -10 | 6))
        || (tables::FILE_G[idx] && matches!(offset, -6 | 10))
        || (tables::FILE_H[idx] && matches!(offset, -15 | -6 | 10 | 17))
}
