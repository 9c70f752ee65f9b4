//! Capture resolution.
//!
//! Runs once per move, from the landing square. Each of the four directions
//! is walked independently: a run of contiguous enemy pieces closed by a
//! friendly piece is captured, a run ending at an empty square or at the
//! board edge is not. A cornered enemy piece is also captured when the mover
//! holds both of its orthogonal neighbours (if the rules allow it).

use super::rays::ray;
use super::{Color, Direction, GameEngine, Square};

impl GameEngine {
    /// Remove every piece captured by the piece that just landed on `to`.
    ///
    /// Returns the captured squares; capture counters are updated, the game
    /// status is not.
    pub(crate) fn resolve_captures(&mut self, to: Square) -> Vec<Square> {
        let Some(mover) = self.occupant_at(to) else {
            return Vec::new();
        };

        let mut captured = Vec::new();
        for dir in Direction::ALL {
            captured.extend(self.flanked_run(to, dir, mover));
        }
        if self.rules.corner_capture {
            captured.extend(self.cornered_pieces(to, mover));
        }

        let victim = mover.opponent();
        for &sq in &captured {
            if self.remove_piece(sq).is_some() {
                self.live[victim.index()] -= 1;
                self.captured[victim.index()] += 1;
            }
        }
        captured
    }

    /// Enemy run starting next to `from` in `dir`, if a `mover` piece closes it.
    fn flanked_run(&self, from: Square, dir: Direction, mover: Color) -> Vec<Square> {
        let mut run = Vec::new();
        for &sq in ray(from, dir) {
            match self.occupant_at(sq) {
                None => return Vec::new(),
                Some(color) if color == mover => return run,
                Some(_) => run.push(sq),
            }
        }
        // Edges never close a run.
        Vec::new()
    }

    /// Enemy corner pieces next to `to` whose other neighbour is also held by `mover`.
    fn cornered_pieces(&self, to: Square, mover: Color) -> Vec<Square> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| to.step(dir))
            .filter(|corner| corner.is_corner())
            .filter(|&corner| self.occupant_at(corner) == Some(mover.opponent()))
            .filter(|&corner| {
                Direction::ALL
                    .into_iter()
                    .filter_map(|dir| corner.step(dir))
                    .filter(|&guard| guard != to)
                    .all(|guard| self.occupant_at(guard) == Some(mover))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{BoardBuilder, Color, Rules, Square, Status};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn names(squares: &[Square]) -> Vec<String> {
        squares.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_closed_by_friend_is_captured() {
        let mut game = BoardBuilder::new()
            .piece(sq("e3"), Color::Red)
            .piece(sq("a6"), Color::Red)
            .piece(sq("e4"), Color::Black)
            .piece(sq("e5"), Color::Black)
            .piece(sq("i9"), Color::Black)
            .side_to_move(Color::Red)
            .build()
            .unwrap();

        let outcome = game.play(sq("a6"), sq("e6")).unwrap();
        assert_eq!(names(&outcome.captured), ["e5", "e4"]);
        assert_eq!(game.occupant_at(sq("e4")), None);
        assert_eq!(game.occupant_at(sq("e5")), None);
    }

    #[test]
    fn test_run_reaching_edge_is_safe() {
        let mut game = BoardBuilder::new()
            .piece(sq("a3"), Color::Red)
            .piece(sq("a9"), Color::Red)
            .piece(sq("e1"), Color::Black)
            .piece(sq("e2"), Color::Black)
            .piece(sq("i9"), Color::Black)
            .side_to_move(Color::Red)
            .build()
            .unwrap();

        let outcome = game.play(sq("a3"), sq("e3")).unwrap();
        assert!(outcome.captured.is_empty());
        assert_eq!(game.occupant_at(sq("e1")), Some(Color::Black));
        assert_eq!(game.occupant_at(sq("e2")), Some(Color::Black));
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut game = BoardBuilder::new()
            .piece(sq("e3"), Color::Red)
            .piece(sq("b6"), Color::Red)
            .piece(sq("e4"), Color::Black)
            .piece(sq("i9"), Color::Black)
            .side_to_move(Color::Red)
            .build()
            .unwrap();

        // e5 stays empty between the landing square e6 and the black piece.
        let outcome = game.play(sq("b6"), sq("e6")).unwrap();
        assert!(outcome.captured.is_empty());
        assert_eq!(game.occupant_at(sq("e4")), Some(Color::Black));
    }

    fn cornered_red(rules: Rules) -> crate::board::GameEngine {
        BoardBuilder::new()
            .rules(rules)
            .piece(sq("i9"), Color::Red)
            .piece(sq("a1"), Color::Red)
            .piece(sq("a2"), Color::Red)
            .piece(sq("a3"), Color::Red)
            .piece(sq("h9"), Color::Black)
            .piece(sq("i5"), Color::Black)
            .side_to_move(Color::Black)
            .build()
            .unwrap()
    }

    #[test]
    fn test_corner_capture() {
        let mut game = cornered_red(Rules::default());
        assert_eq!(game.captured_count(Color::Red), 5);

        let outcome = game.play(sq("i5"), sq("i8")).unwrap();
        assert_eq!(names(&outcome.captured), ["i9"]);
        assert_eq!(game.captured_count(Color::Red), 6);
        assert_eq!(game.occupant_at(sq("i9")), None);
        assert_eq!(game.status(), Status::InProgress);
    }

    #[test]
    fn test_corner_capture_on_by_default() {
        assert!(crate::board::GameEngine::new().rules().corner_capture);
        assert_eq!(cornered_red(Rules::default()).rules(), &Rules::default());
    }

    #[test]
    fn test_corner_capture_disabled() {
        let rules = Rules {
            corner_capture: false,
            ..Rules::default()
        };
        let mut game = cornered_red(rules);

        let outcome = game.play(sq("i5"), sq("i8")).unwrap();
        assert!(outcome.captured.is_empty());
        assert_eq!(game.occupant_at(sq("i9")), Some(Color::Red));
    }

    #[test]
    fn test_corner_needs_both_neighbours() {
        let mut game = BoardBuilder::new()
            .piece(sq("a1"), Color::Red)
            .piece(sq("a5"), Color::Red)
            .piece(sq("e2"), Color::Black)
            .piece(sq("i9"), Color::Black)
            .side_to_move(Color::Black)
            .build()
            .unwrap();

        let outcome = game.play(sq("e2"), sq("a2")).unwrap();
        assert!(outcome.captured.is_empty());
        assert_eq!(game.occupant_at(sq("a1")), Some(Color::Red));
    }
}
