//! Core game types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Color`, `Piece` and `Status` - players, pieces and game state
//! - `Square` - board coordinates in row-letter / column-digit notation
//! - `Direction` - the four orthogonal directions
//! - `Move` and `MoveOutcome` - move requests and their results

mod direction;
mod moves;
mod piece;
mod square;

pub use direction::Direction;
pub use moves::{Move, MoveOutcome};
pub use piece::{Color, Piece, Status};
pub use square::{Square, BOARD_SIZE, NUM_SQUARES};
