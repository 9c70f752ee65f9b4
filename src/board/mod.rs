//! Hasami Shogi board representation and rules.
//!
//! A [`GameEngine`] holds one game: eighteen pieces on a 9x9 grid, the side
//! to move, capture counters and the game status. Pieces slide any distance
//! along a row or column and capture enemy runs by flanking them.
//!
//! # Example
//! ```
//! use hasami_shogi::board::{Color, GameEngine, Status};
//!
//! let mut game = GameEngine::new();
//! assert_eq!(game.turn(), Color::Black);
//! assert!(game.make_move_notation("i5", "e5"));
//! assert_eq!(game.turn(), Color::Red);
//! assert_eq!(game.status(), Status::InProgress);
//! ```

mod builder;
mod capture;
mod display;
mod error;
mod make_move;
mod movegen;
pub mod prelude;
mod rays;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, MoveParseError, PositionError, SquareError};
pub use rules::{Rules, PIECES_PER_SIDE, WINNING_CAPTURES};
pub use state::GameEngine;
pub use types::{
    Color, Direction, Move, MoveOutcome, Piece, Square, Status, BOARD_SIZE, NUM_SQUARES,
};
