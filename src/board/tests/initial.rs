//! Facts about the standard starting position.

use crate::board::{Alliance, Board, PieceKind, Square};

#[test]
fn test_starting_position_has_twenty_moves() {
    let board = Board::standard();
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 20);

    let pawn_moves = moves
        .iter()
        .filter(|m| m.piece().kind() == PieceKind::Pawn)
        .count();
    let knight_moves = moves
        .iter()
        .filter(|m| m.piece().kind() == PieceKind::Knight)
        .count();
    assert_eq!(pawn_moves, 16);
    assert_eq!(knight_moves, 4);
}

#[test]
fn test_starting_position_is_quiet() {
    let board = Board::standard();
    assert!(!board.is_check());
    assert!(!board.is_checkmate());
    assert!(!board.is_stalemate());
    assert!(!board.opponent_player().is_in_check());
    assert!(board.en_passant_pawn().is_none());
    assert_eq!(board.side_to_move(), Alliance::White);
}

#[test]
fn test_starting_position_piece_placement() {
    let board = Board::standard();

    let king_square: Square = "e1".parse().unwrap();
    let king = board.tile(king_square).piece().unwrap();
    assert_eq!(king.kind(), PieceKind::King);
    assert_eq!(king.alliance(), Alliance::White);
    assert!(king.is_first_move());

    let rook = board.piece_at("a8".parse().unwrap()).unwrap();
    assert_eq!(rook.kind(), PieceKind::Rook);
    assert_eq!(rook.alliance(), Alliance::Black);

    let empty: Square = "e4".parse().unwrap();
    assert!(!board.tile(empty).is_occupied());
    assert!(board.piece_at(empty).is_none());
}

#[test]
fn test_starting_position_piece_counts() {
    let board = Board::standard();
    for alliance in Alliance::BOTH {
        let pieces: Vec<_> = board.pieces(alliance).collect();
        assert_eq!(pieces.len(), 16, "{alliance} should start with 16 pieces");

        let material: i32 = pieces.iter().map(|p| p.kind().value()).sum();
        // 8 pawns, 2 knights, 2 bishops, 2 rooks, queen and king
        assert_eq!(material, 8 * 100 + 2 * 320 + 2 * 330 + 2 * 500 + 900 + 20000);
    }
}

#[test]
fn test_opening_move_changes_side() {
    let board = Board::standard();
    let mv = board.find_move("e2".parse().unwrap(), "e4".parse().unwrap()).unwrap();
    assert!(mv.is_pawn_jump());

    let transition = board.make_move(&mv);
    assert!(transition.is_done());

    let next = transition.board().unwrap();
    assert_eq!(next.side_to_move(), Alliance::Black);
    assert!(next.en_passant_pawn().is_some());
    assert_eq!(next.legal_moves().len(), 20);
}

#[test]
fn test_display_renders_eight_ranks() {
    let text = Board::standard().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].contains('r'), "top rank should show black pieces");
    assert!(lines[7].contains('R'), "bottom rank should show white pieces");
}
