//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises move generation, pass handling, and termination in one sweep.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::{Board, Player};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Board::new(), Player::default(), depth, false)
}

fn leaves_below(board: &Board, to_move: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(to_move);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !to_move, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|mv| {
            let mut child = board.clone();
            child.apply(to_move, mv).unwrap();
            leaves_below(&child, !to_move, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

// Slow without optimizations; run with `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}
