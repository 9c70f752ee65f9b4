//! Error types for board operations.

use std::fmt;

use super::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-8)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-8)
    ColOutOfBounds { col: usize },
    /// Invalid board notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-8)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string must name exactly two squares (4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Reason a move was rejected.
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game already has a winner
    GameOver,
    /// No piece stands on the source square
    EmptySource { square: Square },
    /// The piece on the source square belongs to the side not on move
    WrongTurn { expected: Color, found: Color },
    /// The destination square is occupied
    DestinationOccupied { square: Square },
    /// Source and destination share neither a row nor a column
    NotAligned { from: Square, to: Square },
    /// A piece stands between source and destination
    PathBlocked { at: Square },
    /// Caller supplied notation that does not name a square
    InvalidSquare(SquareError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::EmptySource { square } => write!(f, "No piece on {square}"),
            MoveError::WrongTurn { expected, found } => {
                write!(f, "It is {expected}'s turn, piece is {found}")
            }
            MoveError::DestinationOccupied { square } => {
                write!(f, "Destination {square} is occupied")
            }
            MoveError::NotAligned { from, to } => {
                write!(f, "{from} and {to} are not on the same row or column")
            }
            MoveError::PathBlocked { at } => write!(f, "Path is blocked at {at}"),
            MoveError::InvalidSquare(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(e: SquareError) -> Self {
        MoveError::InvalidSquare(e)
    }
}

/// Error type for positions that cannot occur in a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// More pieces of one color than a side starts with
    TooManyPieces { color: Color, count: usize },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::TooManyPieces { color, count } => {
                write!(f, "{color} has {count} pieces, at most 9 allowed")
            }
        }
    }
}

impl std::error::Error for PositionError {}
