use once_cell::sync::Lazy;

use super::{Direction, Square};

/// For every square and direction, the squares walked outward from it up to
/// the board edge, nearest first.
pub(crate) static RAYS: Lazy<Vec<[Vec<Square>; 4]>> = Lazy::new(|| {
    Square::all()
        .map(|origin| {
            Direction::ALL.map(|dir| {
                std::iter::successors(origin.step(dir), |sq| sq.step(dir)).collect::<Vec<_>>()
            })
        })
        .collect()
});

#[inline]
pub(crate) fn ray(from: Square, dir: Direction) -> &'static [Square] {
    &RAYS[from.index()][dir.index()]
}

/// Squares strictly between `from` and `to` when both share a row or column.
pub(crate) fn between(from: Square, to: Square) -> Option<&'static [Square]> {
    let dir = from.direction_to(to)?;
    let ray = ray(from, dir);
    let len = ray.iter().position(|&sq| sq == to)?;
    Some(&ray[..len])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NUM_SQUARES;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_ray_lengths() {
        assert_eq!(RAYS.len(), NUM_SQUARES);
        let e5 = sq("e5");
        for dir in Direction::ALL {
            assert_eq!(ray(e5, dir).len(), 4);
        }
        assert!(ray(sq("a1"), Direction::Up).is_empty());
        assert_eq!(ray(sq("a1"), Direction::Right).len(), 8);
    }

    #[test]
    fn test_ray_is_nearest_first() {
        let r = ray(sq("c3"), Direction::Down);
        let names: Vec<String> = r.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["d3", "e3", "f3", "g3", "h3", "i3"]);
    }

    #[test]
    fn test_between() {
        let path = between(sq("a1"), sq("a5")).unwrap();
        let names: Vec<String> = path.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["a2", "a3", "a4"]);

        assert_eq!(between(sq("e5"), sq("d5")).unwrap().len(), 0);
        assert!(between(sq("a1"), sq("b2")).is_none());
        assert!(between(sq("a1"), sq("a1")).is_none());
    }
}
