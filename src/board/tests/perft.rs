//! Perft node counts for move generation correctness.
//!
//! The expected values are the published counts for these well known
//! positions. The quick test keeps to shallow depths; run the ignored
//! test (ideally under `--release`) for the deeper ones.

use crate::board::Board;
use std::time::Instant;

struct Position {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const POSITIONS: &[Position] = &[
    Position {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197_281)],
    },
    Position {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039), (3, 97_862)],
    },
    Position {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43_238)],
    },
    Position {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264), (3, 9467), (4, 422_333)],
    },
    Position {
        name: "Position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        depths: &[(1, 44), (2, 1486), (3, 62_379)],
    },
    Position {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21_637)],
    },
    Position {
        name: "Promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 24), (2, 496), (3, 9483)],
    },
    Position {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13_744)],
    },
];

const QUICK_NODE_LIMIT: u64 = 3000;

fn run_positions(limit: Option<u64>) {
    for position in POSITIONS {
        let board = Board::from_fen(position.fen);

        for &(depth, expected) in position.depths {
            if limit.is_some_and(|max| expected > max) {
                continue;
            }

            let start = Instant::now();
            let nodes = board.perft(depth);
            let duration = start.elapsed();

            println!(
                "{}: depth {} -> {} nodes in {:?}",
                position.name, depth, nodes, duration
            );

            assert_eq!(
                nodes, expected,
                "Perft mismatch for '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
    }
}

#[test]
fn test_perft_quick() {
    run_positions(Some(QUICK_NODE_LIMIT));
}

#[test]
#[ignore = "deep perft counts, run with --release"]
fn test_perft_exhaustive() {
    run_positions(None);
}
