//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::board::error::SquareError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 9;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

fn row_to_index(row: char) -> Option<usize> {
    match row {
        'a'..='i' => Some(row as usize - 'a' as usize),
        _ => None,
    }
}

fn col_to_index(col: char) -> Option<usize> {
    match col {
        '1'..='9' => Some(col as usize - '1' as usize),
        _ => None,
    }
}

/// A square on the board, represented as (row, col).
///
/// Row 0 is row `a` (Red's home row), row 8 is row `i` (Black's home row).
/// Column 0 is column `1`. A `Square` is always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Square(u8, u8);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Get the row (0-8, where 0 = row a)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize
    }

    /// Get the column (0-8, where 0 = column 1)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1 as usize
    }

    /// Get the square's index (0-80, a1=0, a2=1, ..., i9=80)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Create a square from an index (0-80)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < NUM_SQUARES {
            Some(Square((idx / BOARD_SIZE) as u8, (idx % BOARD_SIZE) as u8))
        } else {
            None
        }
    }

    /// Iterate over every square in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).filter_map(Square::from_index)
    }

    /// The neighbouring square one step in `dir`, if it is on the board.
    #[inline]
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Square> {
        let (dr, dc) = dir.delta();
        let row = self.row().checked_add_signed(dr)?;
        let col = self.col().checked_add_signed(dc)?;
        Square::new(row, col)
    }

    /// Direction of travel from `self` to `other` if both share a row or column.
    #[must_use]
    pub fn direction_to(self, other: Square) -> Option<Direction> {
        use std::cmp::Ordering::{Equal, Greater, Less};
        match (other.row().cmp(&self.row()), other.col().cmp(&self.col())) {
            (Less, Equal) => Some(Direction::Up),
            (Greater, Equal) => Some(Direction::Down),
            (Equal, Less) => Some(Direction::Left),
            (Equal, Greater) => Some(Direction::Right),
            _ => None,
        }
    }

    /// True for the four corner squares (a1, a9, i1, i9).
    #[inline]
    #[must_use]
    pub const fn is_corner(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        (self.0 == 0 || self.0 == last) && (self.1 == 0 || self.1 == last)
    }

    /// Row letter in board notation.
    #[inline]
    #[must_use]
    pub const fn row_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Column digit in board notation.
    #[inline]
    #[must_use]
    pub const fn col_char(self) -> char {
        (b'1' + self.1) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_char(), self.col_char())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row as u8, col as u8))
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.row(), sq.col())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(row), Some(col), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let row = row_to_index(row.to_ascii_lowercase()).ok_or_else(invalid)?;
        let col = col_to_index(col).ok_or_else(invalid)?;
        Ok(Square(row as u8, col as u8))
    }
}
