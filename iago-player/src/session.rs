//! The human-vs-computer session the presentation layer talks to.
//!
//! The human plays [`White`](Player::White) and moves first; the computer
//! plays Black, as in the classic arrangement this engine reproduces. The
//! presentation layer feeds clicks into [`Session::attempt_human_move`],
//! schedules [`Session::run_computer_turn`] after whatever pause it likes,
//! and repaints from the returned snapshots.

use crate::agent::Agent;
use derive_more::{Display, Error, From};
use iago_othello::{
    Board, Game, IllegalMoveError, Location, Move, OutOfBoundsError, Player, Score, Status,
};
use tracing::info;

/// The side driven by the presentation layer.
pub const HUMAN: Player = Player::White;

/// The side driven by the agent.
pub const COMPUTER: Player = Player::Black;

/// Who the session is waiting on, or the final result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingHuman,
    AwaitingComputer,
    GameOver(Score),
}

/// Why a human move was rejected. The board is untouched in either case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    #[display(fmt = "{}", _0)]
    OutOfBounds(OutOfBoundsError),
    #[display(fmt = "{}", _0)]
    Illegal(IllegalMoveError),
}

/// What a completed turn looked like: the move made (or a pass), a
/// snapshot of the board after it, and where the game stands now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub played: Move,
    pub board: Board,
    pub phase: Phase,
}

/// One human-vs-computer game. Owns the [`Game`] and the computer's agent.
pub struct Session<A> {
    game: Game,
    agent: A,
}

impl<A: Agent> Session<A> {
    /// Start a session with a fresh game.
    pub fn new(agent: A) -> Self {
        Session {
            game: Game::new(),
            agent,
        }
    }

    /// Throw the current game away and start over.
    pub fn new_game(&mut self) {
        self.game = Game::new();
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn phase(&self) -> Phase {
        match self.game.status() {
            Status::Turn(player) if player == COMPUTER => Phase::AwaitingComputer,
            Status::Turn(_) => Phase::AwaitingHuman,
            Status::Finished(score) => Phase::GameOver(score),
        }
    }

    /// Every legal move for `player`, for highlighting candidate cells.
    /// Pure; the presentation layer may call it on every repaint.
    pub fn legal_moves_for(&self, player: Player) -> Vec<Location> {
        self.game.legal_moves_for(player)
    }

    /// Play the human's disc at (`row`, `col`).
    ///
    /// Rejected without side effects when the coordinates are off the
    /// board, when it is not the human's turn, or when the move captures
    /// nothing. On success the outcome says whose turn is next: if the
    /// computer has no reply it is skipped and the phase stays
    /// [`Phase::AwaitingHuman`].
    pub fn attempt_human_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let loc = Location::from_coords(row, col)?;
        if self.game.active_player() != Some(HUMAN) {
            return Err(IllegalMoveError { location: loc }.into());
        }
        self.game.apply_move(loc)?;
        Ok(self.outcome(Move::Piece(loc)))
    }

    /// Let the agent take the computer's turn.
    ///
    /// Reports [`Move::Pass`] when the computer has nothing to play —
    /// including when the turn already bounced back to the human or the
    /// game is over, so a stray invocation is harmless.
    pub fn run_computer_turn(&mut self) -> MoveOutcome {
        let played = if self.game.active_player() == Some(COMPUTER) {
            match self.agent.choose_move(self.game.board(), COMPUTER) {
                Some(loc) => match self.game.apply_move(loc) {
                    Ok(()) => Move::Piece(loc),
                    Err(err) => {
                        // The agent broke its contract; treat it as a pass
                        // rather than wedging the game.
                        tracing::warn!(%err, "agent chose an illegal move");
                        Move::Pass
                    }
                },
                None => Move::Pass,
            }
        } else {
            Move::Pass
        };
        self.outcome(played)
    }

    fn outcome(&self, played: Move) -> MoveOutcome {
        let phase = self.phase();
        if let Phase::GameOver(score) = phase {
            info!(white = score.white, black = score.black, "game over");
        }
        MoveOutcome {
            played,
            board: self.game.board().clone(),
            phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    /// Deterministic stand-in agent: always the first legal move.
    struct FirstMove;

    impl Agent for FirstMove {
        fn choose_move(&mut self, board: &Board, player: Player) -> Option<Location> {
            board.legal_moves(player).first().copied()
        }
    }

    /// An agent that violates its contract on purpose.
    struct AlwaysCorner;

    impl Agent for AlwaysCorner {
        fn choose_move(&mut self, _: &Board, _: Player) -> Option<Location> {
            Some(loc(0, 0))
        }
    }

    #[test]
    fn opening_exchange() {
        let mut session = Session::new(FirstMove);
        assert_eq!(session.phase(), Phase::AwaitingHuman);

        let outcome = session.attempt_human_move(2, 4).unwrap();
        assert_eq!(outcome.played, Move::Piece(loc(2, 4)));
        assert_eq!(outcome.phase, Phase::AwaitingComputer);

        // The human's first move captures exactly (3,4); the rest of the
        // center is untouched.
        assert_eq!(outcome.board.get(loc(2, 4)), Some(Player::White));
        assert_eq!(outcome.board.get(loc(3, 4)), Some(Player::White));
        assert_eq!(outcome.board.get(loc(3, 3)), Some(Player::White));
        assert_eq!(outcome.board.get(loc(4, 4)), Some(Player::White));
        assert_eq!(outcome.board.get(loc(4, 3)), Some(Player::Black));

        let reply = session.run_computer_turn();
        match reply.played {
            Move::Piece(mv) => assert_eq!(reply.board.get(mv), Some(Player::Black)),
            Move::Pass => panic!("computer had moves and passed"),
        }
        assert_eq!(reply.phase, Phase::AwaitingHuman);
    }

    #[test]
    fn out_of_bounds_coordinates_are_rejected() {
        let mut session = Session::new(FirstMove);
        match session.attempt_human_move(8, 0) {
            Err(MoveError::OutOfBounds(err)) => {
                assert_eq!((err.row, err.col), (8, 0));
            }
            other => panic!("expected an out-of-bounds rejection, got {:?}", other),
        }
        assert_eq!(session.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn illegal_moves_are_rejected_without_side_effects() {
        let mut session = Session::new(FirstMove);
        let before = session.board().clone();

        for (row, col) in [(3, 3), (0, 0), (2, 3)] {
            match session.attempt_human_move(row, col) {
                Err(MoveError::Illegal(err)) => assert_eq!(err.location, loc(row, col)),
                other => panic!("expected an illegal-move rejection, got {:?}", other),
            }
        }
        assert_eq!(session.board(), &before);
        assert_eq!(session.phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn human_moves_are_rejected_on_the_computers_turn() {
        let mut session = Session::new(FirstMove);
        session.attempt_human_move(2, 4).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingComputer);

        // (4,2) would be legal for white, but it is not white's turn.
        match session.attempt_human_move(4, 2) {
            Err(MoveError::Illegal(_)) => {}
            other => panic!("expected an illegal-move rejection, got {:?}", other),
        }
    }

    #[test]
    fn a_misbehaving_agent_counts_as_a_pass() {
        let mut session = Session::new(AlwaysCorner);
        session.attempt_human_move(2, 4).unwrap();

        let before = session.board().clone();
        let outcome = session.run_computer_turn();
        assert_eq!(outcome.played, Move::Pass);
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn new_game_resets_everything() {
        let mut session = Session::new(FirstMove);
        session.attempt_human_move(2, 4).unwrap();
        session.run_computer_turn();

        session.new_game();
        assert_eq!(session.phase(), Phase::AwaitingHuman);
        assert_eq!(session.board(), &Board::new());
        assert_eq!(
            session.legal_moves_for(HUMAN),
            Board::new().legal_moves(HUMAN)
        );
    }

    #[test]
    fn legal_move_queries_do_not_disturb_the_session() {
        let session = Session::new(FirstMove);
        let highlighted = session.legal_moves_for(HUMAN);
        assert_eq!(
            highlighted,
            vec![loc(2, 4), loc(3, 5), loc(4, 2), loc(5, 3)]
        );
        // Repeated repaint-style queries see identical state.
        assert_eq!(session.legal_moves_for(HUMAN), highlighted);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn stray_computer_turns_pass_harmlessly() {
        let mut session = Session::new(FirstMove);
        let outcome = session.run_computer_turn();
        assert_eq!(outcome.played, Move::Pass);
        assert_eq!(outcome.phase, Phase::AwaitingHuman);
        assert_eq!(session.board(), &Board::new());
    }
}
