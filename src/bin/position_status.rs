use std::env;
use std::process::ExitCode;

use chess_rules::board::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: position_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for notation in args.iter().skip(1) {
        let mv = match game.board().parse_move(notation) {
            Ok(mv) => mv,
            Err(err) => {
                eprintln!("bad move '{notation}': {err}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = game.submit(mv) {
            eprintln!("rejected move '{notation}': {err}");
            return ExitCode::FAILURE;
        }
    }

    let board = game.board();
    let legal_moves = board.legal_moves();
    println!("side_to_move: {}", board.side_to_move());
    println!("state: {}", game.state());
    println!("check: {}", board.is_check());
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
