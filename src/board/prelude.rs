//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use hasami_shogi::board::prelude::*;
//! ```

pub use super::{
    BoardBuilder, Color, GameEngine, Move, MoveError, MoveOutcome, Piece, Rules, Square,
    SquareError, Status,
};
