#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Color;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 9;

/// Captures of one color that end the game (one piece or fewer left).
pub const WINNING_CAPTURES: usize = PIECES_PER_SIDE - 1;

/// Rule options fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rules {
    /// Capture a cornered piece by occupying both of its orthogonal neighbours
    pub corner_capture: bool,
    pub first_to_move: Color,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            corner_capture: true,
            first_to_move: Color::Black,
        }
    }
}
