//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `initial.rs` - Starting position and query behaviour
//! - `legality.rs` - Move validation and rejection
//! - `captures.rs` - Flanking captures played through whole moves
//! - `win.rs` - Game end detection
//! - `proptest.rs` - Property-based tests


use crate::board::Square;

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}
