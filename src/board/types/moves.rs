//! Move and move outcome types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Status;
use super::square::Square;
use crate::board::error::{MoveParseError, SquareError};

/// A requested slide from one square to another.
///
/// A `Move` is only a pair of squares; whether it is legal depends on the
/// position it is played in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Number of squares travelled, or `None` for a non-orthogonal move
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        self.from.direction_to(self.to)?;
        Some(self.from.row().abs_diff(self.to.row()) + self.from.col().abs_diff(self.to.col()))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Accepts "a1a5", "a1-a5" and "a1 a5".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if compact.chars().count() != 4 {
            return Err(MoveParseError::InvalidLength {
                len: compact.chars().count(),
            });
        }
        let split = compact.char_indices().nth(2).map_or(compact.len(), |(i, _)| i);
        let (from, to) = compact.split_at(split);
        let invalid = |_: SquareError| MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        Ok(Move {
            from: from.parse::<Square>().map_err(invalid)?,
            to: to.parse::<Square>().map_err(invalid)?,
        })
    }
}

/// What a successfully played move did to the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    /// Squares whose pieces were captured, in the order they were removed
    pub captured: Vec<Square>,
    /// Game status after the move
    pub status: Status,
}

impl MoveOutcome {
    #[inline]
    #[must_use]
    pub fn ended_game(&self) -> bool {
        self.status.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_forms() {
        let expected = Move::new(sq("a1"), sq("a5"));
        assert_eq!("a1a5".parse::<Move>().unwrap(), expected);
        assert_eq!("a1-a5".parse::<Move>().unwrap(), expected);
        assert_eq!("a1 a5".parse::<Move>().unwrap(), expected);
        assert_eq!(expected.to_string(), "a1a5");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "a1a".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            "a1z5".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "a0a5".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_parse_multibyte_chars() {
        for bad in ["€1a5", "a1€5", "a€a5", "éééé"] {
            assert!(
                matches!(bad.parse::<Move>(), Err(MoveParseError::InvalidSquare { .. })),
                "{bad:?} should be an invalid square"
            );
        }
        assert_eq!(
            "€1a".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
    }

    #[test]
    fn test_distance() {
        assert_eq!(Move::new(sq("a1"), sq("a5")).distance(), Some(4));
        assert_eq!(Move::new(sq("i9"), sq("c9")).distance(), Some(6));
        assert_eq!(Move::new(sq("a1"), sq("b2")).distance(), None);
        assert_eq!(Move::new(sq("a1"), sq("a1")).distance(), None);
    }
}
