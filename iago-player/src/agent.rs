use iago_othello::{Board, Location, Player};

/// A strategy for choosing moves, consulted on the computer's turn.
///
/// `choose_move` must return a move from `board.legal_moves(player)`, or
/// `None` when that set is empty (a pass).
pub trait Agent {
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Location>;
}
