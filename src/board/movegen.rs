use super::rays::ray;
use super::{Direction, GameEngine, Move, Square};

impl GameEngine {
    /// Every legal move for the side to move. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_over() {
            return Vec::new();
        }
        self.pieces()
            .filter(|piece| piece.color() == self.turn)
            .flat_map(move |piece| self.slides_from(piece.position()))
            .collect()
    }

    /// Empty squares reachable from `from` along each direction until blocked.
    fn slides_from(&self, from: Square) -> impl Iterator<Item = Move> + '_ {
        Direction::ALL.into_iter().flat_map(move |dir| {
            ray(from, dir)
                .iter()
                .take_while(move |&&sq| self.piece_at(sq).is_none())
                .map(move |&to| Move::new(from, to))
        })
    }
}
