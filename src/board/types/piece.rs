//! Piece, color and game status types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Player colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors in index order (Red=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Home row for this color (0 = row a for Red, 8 = row i for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn home_row(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 8,
        }
    }

    /// Parse a color name, case-insensitively ("red", "BLACK", ...)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Color> {
        if name.eq_ignore_ascii_case("red") {
            Some(Color::Red)
        } else if name.eq_ignore_ascii_case("black") {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Single-character symbol used in board diagrams
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

/// A game piece: a fixed color and the square it currently stands on.
///
/// Pieces live inside a [`GameEngine`](crate::board::GameEngine) and are only
/// ever moved or removed by it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    color: Color,
    position: Square,
}

impl Piece {
    #[inline]
    #[must_use]
    pub(crate) const fn new(color: Color, position: Square) -> Self {
        Piece { color, position }
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Square {
        self.position
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Square) {
        self.position = position;
    }
}

/// Overall state of a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    InProgress,
    RedWon,
    BlackWon,
}

impl Status {
    /// Terminal status declaring `color` the winner
    #[inline]
    #[must_use]
    pub const fn won_by(color: Color) -> Status {
        match color {
            Color::Red => Status::RedWon,
            Color::Black => Status::BlackWon,
        }
    }

    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Status::InProgress => None,
            Status::RedWon => Some(Color::Red),
            Status::BlackWon => Some(Color::Black),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress => write!(f, "IN_PROGRESS"),
            Status::RedWon => write!(f, "RED_WON"),
            Status::BlackWon => write!(f, "BLACK_WON"),
        }
    }
}
