use std::fmt;

use super::{GameEngine, Square, BOARD_SIZE};

/// Plain-text diagram: column digits across the top, row letters down the
/// side, `R` / `B` for pieces and `.` for empty squares.
impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 1..=BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{}", (b'a' + row as u8) as char)?;
            for col in 0..BOARD_SIZE {
                let symbol = Square::new(row, col)
                    .and_then(|sq| self.occupant_at(sq))
                    .map_or('.', |color| color.to_char());
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
