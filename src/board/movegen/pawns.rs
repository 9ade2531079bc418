//! Pawn move generation.

use crate::board::tables;
use crate::board::tile::Tiles;
use crate::board::types::{Move, Piece, Square, PROMOTION_KINDS};

pub(crate) fn moves(tiles: &Tiles, en_passant_pawn: Option<Piece>, pawn: Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    let alliance = pawn.alliance();
    let dir = alliance.direction();
    let from = pawn.square();

    // single push, then the double step behind it
    if let Some(push) = from.offset(8 * dir) {
        if !tiles[push.index()].is_occupied() {
            if alliance.is_promotion_square(push) {
                for kind in PROMOTION_KINDS {
                    moves.push(Move::promotion(pawn, push, kind, None));
                }
            } else {
                moves.push(Move::normal(pawn, push));
                if pawn.is_first_move() && alliance.is_pawn_start(from) {
                    if let Some(jump) = push.offset(8 * dir) {
                        if !tiles[jump.index()].is_occupied() {
                            moves.push(Move::pawn_jump(pawn, jump));
                        }
                    }
                }
            }
        }
    }

    // diagonal captures toward each wing
    for offset in [7 * dir, 9 * dir] {
        if wraps_edge(from, offset) {
            continue;
        }
        let Some(target) = from.offset(offset) else {
            continue;
        };
        if let Some(victim) = tiles[target.index()].piece() {
            if victim.alliance() != alliance {
                if alliance.is_promotion_square(target) {
                    for kind in PROMOTION_KINDS {
                        moves.push(Move::promotion(pawn, target, kind, Some(victim)));
                    }
                } else {
                    moves.push(Move::attack(pawn, target, victim));
                }
            }
        } else if let Some(ep_pawn) = en_passant_pawn {
            if !alliance.is_en_passant_rank(from) {
                continue;
            }
            // the jumped pawn stands beside us on the capture file
            let beside = if offset == 7 * dir {
                from.offset(-dir)
            } else {
                from.offset(dir)
            };
            if beside == Some(ep_pawn.square()) && ep_pawn.alliance() != alliance {
                moves.push(Move::en_passant(pawn, target, ep_pawn));
            }
        }
    }

    moves
}

/// A signed capture offset of -7 or +9 steps toward the h-file, one of -9 or
/// +7 toward the a-file; from the edge file those offsets wrap to the other
/// side of the board.
fn wraps_edge(from: Square, offset: i16) -> bool {
    let idx = from.index();
    (tables::FILE_H[idx] && matches!(offset, -7 | 9))
        || (tables::FILE_A[idx] && matches!(offset, -9 | 7))
}
