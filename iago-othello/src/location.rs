//! Code for working with [`Location`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use std::fmt::{self, Formatter, Write};

/// A location on the Othello board.
///
/// A `Location` always names a real cell: both coordinates were checked at
/// construction, so board reads and writes through one cannot go out of
/// bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    row: usize,
    col: usize,
}

/// One of the eight compass directions a capturing ray can follow.
///
/// The same table drives validation and application, so the two can never
/// disagree about which cells a move reaches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, in clockwise order from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (row, column) step this direction takes per cell.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl Location {
    /// Construct from row and column coordinates, checking bounds.
    pub fn from_coords(row: usize, col: usize) -> Result<Self, OutOfBoundsError> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Ok(Self { row, col })
        } else {
            Err(OutOfBoundsError { row, col })
        }
    }

    /// Construct from a row-major cell index. Panics if `index >= 64`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < NUM_SPACES);
        Self {
            row: index / EDGE_LENGTH,
            col: index % EDGE_LENGTH,
        }
    }

    /// Convert into a row-major cell index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row * EDGE_LENGTH + self.col
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col
    }

    /// Iterate every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES).map(Location::from_index)
    }

    /// Step one cell along `dir`, or `None` if that leaves the board.
    pub fn offset(self, dir: Direction) -> Option<Self> {
        let (d_row, d_col) = dir.delta();
        let row = self.row as isize + d_row;
        let col = self.col as isize + d_col;
        if (0..EDGE_LENGTH as isize).contains(&row) && (0..EDGE_LENGTH as isize).contains(&col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// A coordinate pair outside the 8x8 grid was supplied.
///
/// Unreachable from a presentation layer that maps clicks to cells correctly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OutOfBoundsError {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "coordinates ({}, {}) are off the board", self.row, self.col)
    }
}

impl std::error::Error for OutOfBoundsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseLocationError;

impl fmt::Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location string")
    }
}

impl std::error::Error for ParseLocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Build a [`Location`] from 1-indexed string notation ("A4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next() != None {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).or(Err(ParseLocationError))
    }
}
