//! Fluent builder for constructing arbitrary positions.
//!
//! Capture counters and the game status are derived from the pieces placed,
//! so a built position always satisfies the engine's invariants.
//!
//! # Example
//! ```
//! use hasami_shogi::board::{BoardBuilder, Color, Square};
//!
//! let e5: Square = "e5".parse().unwrap();
//! let game = BoardBuilder::new()
//!     .piece(e5, Color::Red)
//!     .piece("a1".parse().unwrap(), Color::Red)
//!     .piece("i9".parse().unwrap(), Color::Black)
//!     .piece("i8".parse().unwrap(), Color::Black)
//!     .side_to_move(Color::Red)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.occupant_at(e5), Some(Color::Red));
//! assert_eq!(game.captured_count(Color::Black), 7);
//! ```

use super::error::PositionError;
use super::rules::PIECES_PER_SIDE;
use super::{Color, GameEngine, Rules, Square, BOARD_SIZE};

/// A fluent builder for constructing `GameEngine` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color)>,
    side_to_move: Option<Color>,
    rules: Rules,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: None,
            rules: Rules::default(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for color in Color::BOTH {
            for col in 0..BOARD_SIZE {
                if let Some(sq) = Square::new(color.home_row(), col) {
                    builder.pieces.push((sq, color));
                }
            }
        }
        builder
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, color));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move (defaults to the rules' first mover).
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = Some(color);
        self
    }

    #[must_use]
    pub const fn rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the position.
    ///
    /// Fails if either color has more pieces than a side starts with.
    pub fn build(self) -> Result<GameEngine, PositionError> {
        for color in Color::BOTH {
            let count = self.pieces.iter().filter(|(_, c)| *c == color).count();
            if count > PIECES_PER_SIDE {
                return Err(PositionError::TooManyPieces { color, count });
            }
        }

        let mut engine = GameEngine::empty(self.rules);
        for (square, color) in self.pieces {
            engine.set_piece(square, color);
        }
        if let Some(color) = self.side_to_move {
            engine.turn = color;
        }
        engine.refresh_counters();
        Ok(engine)
    }
}
