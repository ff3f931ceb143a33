//! The board and the rules of capture.
//!
//! [`Board`] is the single source of truth for Othello legality: the
//! directional scan in [`Board::captures_along`] backs both the dry-run
//! queries ([`Board::is_legal`], [`Board::legal_moves`]) and the mutating
//! [`Board::apply`], so the two can never diverge.

use crate::location::{Direction, Location};
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::cmp::Ordering;
use std::fmt::{self, Formatter};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Default for Player {
    /// Gets the starting player (white).
    fn default() -> Self {
        Self::White
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => f.write_str("White"),
            Player::Black => f.write_str("Black"),
        }
    }
}

/// Disc totals for both players.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub white: u8,
    pub black: u8,
}

impl Score {
    /// The player with strictly more discs, or `None` for a tie.
    pub fn winner(self) -> Option<Player> {
        match self.white.cmp(&self.black) {
            Ordering::Greater => Some(Player::White),
            Ordering::Less => Some(Player::Black),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "White {} - Black {}", self.white, self.black)
    }
}

/// A move that cannot be played: the cell is occupied, no direction
/// captures, or the game is already over. Expected and recoverable; the
/// caller rejects the move and the board is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IllegalMoveError {
    pub location: Location,
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move at {}", self.location)
    }
}

impl std::error::Error for IllegalMoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid board string")]
pub struct ParseBoardError;

/// An 8x8 grid of cells, row-major. `None` is an empty cell.
///
/// Mutated in place for the life of one game; [`Game`](crate::Game) holds
/// the only writable reference while a game is running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; NUM_SPACES],
}

impl Board {
    /// The fixed starting position: white on (3,3) and (4,4), black on
    /// (3,4) and (4,3).
    pub fn new() -> Self {
        let mut cells = [None; NUM_SPACES];
        cells[3 * EDGE_LENGTH + 3] = Some(Player::White);
        cells[4 * EDGE_LENGTH + 4] = Some(Player::White);
        cells[3 * EDGE_LENGTH + 4] = Some(Player::Black);
        cells[4 * EDGE_LENGTH + 3] = Some(Player::Black);
        Board { cells }
    }

    /// Read one cell.
    #[inline]
    pub fn get(&self, loc: Location) -> Option<Player> {
        self.cells[loc.to_index()]
    }

    /// Write one cell.
    #[inline]
    pub fn set(&mut self, loc: Location, cell: Option<Player>) {
        self.cells[loc.to_index()] = cell;
    }

    /// Count the discs on the board for both players.
    pub fn count_discs(&self) -> Score {
        let mut score = Score { white: 0, black: 0 };
        for cell in self.cells.iter() {
            match cell {
                Some(Player::White) => score.white += 1,
                Some(Player::Black) => score.black += 1,
                None => {}
            }
        }
        score
    }

    /// Walk outward from `origin` along `dir` and return the length of the
    /// contiguous run of opponent discs closed off by one of `player`'s own
    /// discs.
    ///
    /// Returns 0 when the ray hits an empty cell, leaves the board, or
    /// reaches the anchor with no opponent discs in between; none of those
    /// capture. `origin` itself is not examined.
    pub fn captures_along(&self, player: Player, origin: Location, dir: Direction) -> usize {
        let mut run = 0;
        let mut cursor = origin;
        loop {
            cursor = match cursor.offset(dir) {
                Some(next) => next,
                None => return 0,
            };
            match self.get(cursor) {
                Some(p) if p == player => return run,
                Some(_) => run += 1,
                None => return 0,
            }
        }
    }

    /// Whether `player` may move at `loc`: the cell is empty and at least
    /// one direction captures.
    pub fn is_legal(&self, player: Player, loc: Location) -> bool {
        self.get(loc).is_none()
            && Direction::ALL
                .iter()
                .any(|&dir| self.captures_along(player, loc, dir) > 0)
    }

    /// Every legal move for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Location> {
        Location::all()
            .filter(|&loc| self.is_legal(player, loc))
            .collect()
    }

    /// Play `player`'s disc at `loc`, flipping every captured run.
    ///
    /// All eight capture counts are measured against the pre-move board
    /// before any disc changes hands, so no direction can see a
    /// partially-flipped line.
    pub fn apply(&mut self, player: Player, loc: Location) -> Result<(), IllegalMoveError> {
        if self.get(loc).is_some() {
            return Err(IllegalMoveError { location: loc });
        }

        let captured = Direction::ALL.map(|dir| self.captures_along(player, loc, dir));
        if captured.iter().all(|&run| run == 0) {
            return Err(IllegalMoveError { location: loc });
        }

        for (&dir, &run) in Direction::ALL.iter().zip(captured.iter()) {
            let mut cursor = loc;
            for _ in 0..run {
                // The scan already proved these cells are on the board.
                cursor = match cursor.offset(dir) {
                    Some(next) => next,
                    None => break,
                };
                self.set(cursor, Some(player));
            }
        }
        self.set(loc, Some(player));
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for row in 0..EDGE_LENGTH {
            write!(f, "{} ", row + 1)?;
            for col in 0..EDGE_LENGTH {
                let piece = match self.cells[row * EDGE_LENGTH + col] {
                    Some(Player::White) => 'O',
                    Some(Player::Black) => '#',
                    None => '.',
                };
                write!(f, "{} ", piece)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a board from 64 piece characters ('O' white, '#' black, '.'
/// empty), ignoring whitespace. The inverse of `Display`; used to build
/// mid-game positions in tests.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; NUM_SPACES];
        let mut filled = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if filled == NUM_SPACES {
                return Err(ParseBoardError);
            }
            cells[filled] = match c {
                'O' => Some(Player::White),
                '#' => Some(Player::Black),
                '.' => None,
                _ => return Err(ParseBoardError),
            };
            filled += 1;
        }
        if filled != NUM_SPACES {
            return Err(ParseBoardError);
        }
        Ok(Board { cells })
    }
}
