//! Turn order, forced passes, and game end on top of [`Board`].

use crate::board::{Board, IllegalMoveError, Score};
use crate::location::Location;
use crate::Player;
use std::fmt::{self, Formatter};

/// Where a game stands: someone's turn, or finished with a final score.
///
/// `Turn(p)` always means `p` has at least one legal move; a player with
/// none is skipped inside the transition and never surfaces as the active
/// player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Turn(Player),
    Finished(Score),
}

/// A turn action: place a disc, or pass because no placement is legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Piece(Location),
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Move::Piece(loc) => loc.fmt(f),
            Move::Pass => f.write_str("PASS"),
        }
    }
}

/// One full game: the board plus whose turn it is.
///
/// The `Game` owns its [`Board`] for the life of the game and is the only
/// writer. Created fresh per game and discarded (or replaced) for the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    status: Status,
}

impl Game {
    /// Start a new game: standard opening position, white to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            status: Status::Turn(Player::default()),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The player to move, or `None` once the game is over.
    pub fn active_player(&self) -> Option<Player> {
        match self.status {
            Status::Turn(player) => Some(player),
            Status::Finished(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::Finished(_))
    }

    /// The winner of a finished game; `None` for a draw or while the game
    /// is still running.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            Status::Finished(score) => score.winner(),
            Status::Turn(_) => None,
        }
    }

    /// Current disc totals. Only final once the game is over.
    pub fn score(&self) -> Score {
        self.board.count_discs()
    }

    /// Every legal move for `player` right now, without touching any state.
    ///
    /// Safe to call as often as the presentation layer repaints.
    pub fn legal_moves_for(&self, player: Player) -> Vec<Location> {
        self.board.legal_moves(player)
    }

    /// Play the active player's disc at `loc` and hand the turn onward.
    ///
    /// After the move, the opponent is up if they have a legal move; if not
    /// they are skipped and the mover goes again; if neither side can move
    /// the game finishes with the final count. Every move is illegal once
    /// the game is over.
    pub fn apply_move(&mut self, loc: Location) -> Result<(), IllegalMoveError> {
        let mover = match self.status {
            Status::Turn(player) => player,
            Status::Finished(_) => return Err(IllegalMoveError { location: loc }),
        };
        self.board.apply(mover, loc)?;
        self.status = self.next_status(mover);
        Ok(())
    }

    fn next_status(&self, mover: Player) -> Status {
        let opponent = !mover;
        if !self.board.legal_moves(opponent).is_empty() {
            Status::Turn(opponent)
        } else if !self.board.legal_moves(mover).is_empty() {
            Status::Turn(mover)
        } else {
            Status::Finished(self.board.count_discs())
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
