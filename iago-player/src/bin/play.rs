//! Play Othello against the computer in the terminal.
//!
//! A stand-in for a real presentation layer: it maps typed moves ("C3")
//! onto the session, highlights the cells the human may take, and pauses
//! before the computer replies so the game feels turn-based.

use clap::Parser;
use iago_othello::{Board, Location, Move, Player, EDGE_LENGTH};
use iago_player::{HeuristicAgent, MoveError, Phase, Session, HUMAN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

#[derive(Parser)]
struct Args {
    /// Seed for the computer's tie-breaking; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the computer's reply, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let agent = HeuristicAgent::with_rng(StdRng::seed_from_u64(seed));
    let mut session = Session::new(agent);

    println!("You are White (O). The computer is Black (#).");
    loop {
        match session.phase() {
            Phase::AwaitingHuman => {
                render(session.board(), &session.legal_moves_for(HUMAN));
                let loc = match read_move() {
                    Some(loc) => loc,
                    None => continue,
                };
                match session.attempt_human_move(loc.row(), loc.col()) {
                    Ok(outcome) => {
                        if outcome.phase == Phase::AwaitingHuman {
                            println!("The computer has no reply and passes.");
                        }
                    }
                    Err(MoveError::Illegal(_)) => {
                        println!("{} is not a legal move.", loc);
                    }
                    Err(MoveError::OutOfBounds(err)) => {
                        // Unreachable: parsed notation is always on the board.
                        println!("{}", err);
                    }
                }
            }
            Phase::AwaitingComputer => {
                thread::sleep(Duration::from_millis(args.delay_ms));
                let outcome = session.run_computer_turn();
                match outcome.played {
                    Move::Piece(loc) => println!("The computer plays {}.", loc),
                    Move::Pass => println!("The computer passes."),
                }
            }
            Phase::GameOver(score) => {
                render(session.board(), &[]);
                match score.winner() {
                    Some(winner) => println!("Game over: {} wins! ({})", winner, score),
                    None => println!("Game over: it's a tie! ({})", score),
                }
                return;
            }
        }
    }
}

/// Print the board, marking the human's candidate cells with `*`.
fn render(board: &Board, highlights: &[Location]) {
    println!("\n  A B C D E F G H");
    for loc in Location::all() {
        if loc.col() == 0 {
            print!("{} ", loc.row() + 1);
        }
        let piece = match board.get(loc) {
            Some(Player::White) => 'O',
            Some(Player::Black) => '#',
            None if highlights.contains(&loc) => '*',
            None => '.',
        };
        print!("{} ", piece);
        if loc.col() == EDGE_LENGTH - 1 {
            println!();
        }
    }
}

/// Prompt for one move; `None` means "ask again".
fn read_move() -> Option<Location> {
    print!("Your move: ");
    io::stdout().flush().unwrap();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).unwrap() == 0 {
        // Input closed; bail out instead of spinning forever.
        std::process::exit(0);
    }
    match line.trim().parse() {
        Ok(loc) => Some(loc),
        Err(_) => {
            println!("Enter a move like C3.");
            None
        }
    }
}
