//! The computer opponent: a fixed positional ranking with random
//! tie-breaking.

use crate::agent::Agent;
use iago_othello::{Board, Location, Player};
use itertools::Itertools;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Positional preference tier for a move, lower is better: corners, then
/// outer edges, then the central 4x4 block, then interior cells clear of
/// the edge ring, and last the ring adjacent to the edges.
///
/// This is a fixed ranking with no lookahead, suboptimality included;
/// the tiers are part of the opponent's observable character.
fn tier(loc: Location) -> u8 {
    let (row, col) = (loc.row(), loc.col());
    let edge_row = row == 0 || row == 7;
    let edge_col = col == 0 || col == 7;
    if edge_row && edge_col {
        0
    } else if edge_row || edge_col {
        1
    } else if row > 2 && row < 6 && col > 2 && col < 6 {
        2
    } else if row != 1 && row != 6 && col != 1 && col != 6 {
        3
    } else {
        4
    }
}

/// Picks a uniformly random move from the best-ranked tier of the legal
/// set; passes when there is none.
pub struct HeuristicAgent<R> {
    rng: R,
}

impl HeuristicAgent<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for HeuristicAgent<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HeuristicAgent<R> {
    /// Ties between equally-ranked moves are broken with `rng`, so a
    /// seeded rng gives a fully deterministic opponent.
    pub fn with_rng(rng: R) -> Self {
        HeuristicAgent { rng }
    }
}

impl<R: Rng> Agent for HeuristicAgent<R> {
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Location> {
        let moves = board.legal_moves(player);
        let best = moves.into_iter().min_set_by_key(|&loc| tier(loc));
        let choice = *best.choose(&mut self.rng)?;
        debug!(tier = tier(choice), candidates = best.len(), %choice, "chose move");
        Some(choice)
    }
}
