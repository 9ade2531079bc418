//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{Alliance, Board, Game, PieceKind};

/// Strategy for the length of a random move sequence
fn ply_strategy() -> impl Strategy<Value = usize> {
    1..=12usize
}

/// Strategy for the seed driving move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play `plies` random legal moves from the standard position, stopping
/// early if the game ends.
fn playout(seed: u64, plies: usize) -> Board {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::standard();
    for _ in 0..plies {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board = board
            .make_move(&mv)
            .into_board()
            .expect("a legal move must produce a board");
    }
    board
}

fn king_count(board: &Board, alliance: Alliance) -> usize {
    board
        .pieces(alliance)
        .filter(|p| p.kind() == PieceKind::King)
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every legal move is one of the current player's moves
    #[test]
    fn prop_legal_moves_come_from_the_player(seed in seed_strategy(), plies in ply_strategy()) {
        let board = playout(seed, plies);
        let player_moves = board.current_player().moves();
        for mv in board.legal_moves() {
            prop_assert!(player_moves.contains(&mv));
        }
    }

    /// Property: perft at depth one is the legal move count
    #[test]
    fn prop_perft_one_counts_legal_moves(seed in seed_strategy(), plies in ply_strategy()) {
        let board = playout(seed, plies);
        prop_assert_eq!(board.perft(1), board.legal_moves().len() as u64);
    }

    /// Property: both kings survive any sequence of legal moves
    #[test]
    fn prop_both_kings_survive(seed in seed_strategy(), plies in ply_strategy()) {
        let board = playout(seed, plies);
        prop_assert_eq!(king_count(&board, Alliance::White), 1);
        prop_assert_eq!(king_count(&board, Alliance::Black), 1);
    }

    /// Property: a played move always hands the turn to the opponent
    #[test]
    fn prop_played_moves_alternate_the_turn(seed in seed_strategy(), plies in ply_strategy()) {
        let board = playout(seed, plies);
        let mover = board.side_to_move();
        for mv in board.legal_moves() {
            let next = board.make_move(&mv).into_board().unwrap();
            prop_assert_eq!(next.side_to_move(), mover.opponent());
        }
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_no_legal_move_leaves_own_check(seed in seed_strategy(), plies in ply_strategy()) {
        let board = playout(seed, plies);
        let mover = board.side_to_move();
        for mv in board.legal_moves() {
            let next = board.make_move(&mv).into_board().unwrap();
            prop_assert!(
                !next.player(mover).is_in_check(),
                "move {} exposed the king", mv
            );
        }
    }

    /// Property: a capture removes exactly one enemy piece, anything else none
    #[test]
    fn prop_captures_remove_exactly_one_piece(seed in seed_strategy(), plies in ply_strategy()) {
        let board = playout(seed, plies);
        let mover = board.side_to_move();
        let enemy_before = board.pieces(mover.opponent()).count();
        for mv in board.legal_moves() {
            let next = board.make_move(&mv).into_board().unwrap();
            let enemy_after = next.pieces(mover.opponent()).count();
            let expected = if mv.captured_piece().is_some() {
                enemy_before - 1
            } else {
                enemy_before
            };
            prop_assert_eq!(enemy_after, expected);
            prop_assert_eq!(next.pieces(mover).count(), board.pieces(mover).count());
        }
    }

    /// Property: FEN survives a round trip from any reachable position
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), plies in ply_strategy()) {
        let board = playout(seed, plies);
        let fen = board.to_fen();
        let restored = Board::try_from_fen(&fen).unwrap();

        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(restored.side_to_move(), board.side_to_move());
        prop_assert_eq!(restored.en_passant_pawn(), board.en_passant_pawn());
        prop_assert_eq!(restored.legal_moves().len(), board.legal_moves().len());
    }

    /// Property: undoing every move walks a game back to the start
    #[test]
    fn prop_undo_walks_back_to_the_start(seed in seed_strategy(), plies in ply_strategy()) {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        for _ in 0..plies {
            let moves = game.board().legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            game.submit(mv).unwrap();
        }

        while game.undo().is_some() {}
        prop_assert_eq!(game.ply(), 0);
        prop_assert_eq!(game.board(), &Board::standard());
    }
}
