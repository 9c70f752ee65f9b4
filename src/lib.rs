pub mod board;
pub mod cli;

pub use board::{Color, GameEngine, Move, MoveError, Square, Status};
