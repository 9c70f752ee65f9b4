use super::error::MoveError;
use super::rays::between;
use super::{GameEngine, Move, MoveOutcome, Square, Status};

impl GameEngine {
    /// Check a move against the current position without playing it.
    pub fn validate_move(&self, from: Square, to: Square) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::EmptySource { square: from })?;
        if piece.color() != self.turn {
            return Err(MoveError::WrongTurn {
                expected: self.turn,
                found: piece.color(),
            });
        }
        if self.piece_at(to).is_some() {
            return Err(MoveError::DestinationOccupied { square: to });
        }

        let path = between(from, to).ok_or(MoveError::NotAligned { from, to })?;
        if let Some(&at) = path.iter().find(|&&sq| self.piece_at(sq).is_some()) {
            return Err(MoveError::PathBlocked { at });
        }
        Ok(())
    }

    #[inline]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.validate_move(from, to).is_ok()
    }

    /// Play a move, reporting exactly what happened.
    ///
    /// On success the piece has moved, captures are resolved and either the
    /// turn has passed to the opponent or, if the opponent is down to one
    /// piece, the game has ended (the turn then stays with the winner).
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if let Err(e) = self.validate_move(from, to) {
            #[cfg(feature = "logging")]
            log::trace!("rejected {from}{to}: {e}");
            return Err(e);
        }

        let mut piece = self
            .remove_piece(from)
            .ok_or(MoveError::EmptySource { square: from })?;
        piece.set_position(to);
        self.squares[to.index()] = Some(piece);

        let captured = self.resolve_captures(to);
        #[cfg(feature = "logging")]
        log::debug!("{} played {from}{to}, captured {:?}", self.turn, captured);

        self.status = self.decided_status();
        if self.status == Status::InProgress {
            self.turn = self.turn.opponent();
        } else {
            #[cfg(feature = "logging")]
            log::info!("game over: {}", self.status);
        }

        Ok(MoveOutcome {
            mv: Move::new(from, to),
            captured,
            status: self.status,
        })
    }

    /// Play a move, returning `true` only if it was legal and the game
    /// continues.
    ///
    /// A legal move that ends the game also returns `false`; check
    /// [`status`](GameEngine::status) or use [`play`](GameEngine::play) to
    /// tell the two apart.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        matches!(self.play(from, to), Ok(outcome) if !outcome.ended_game())
    }

    /// [`play`](GameEngine::play) with squares in board notation ("a1", "i9").
    pub fn play_notation(&mut self, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        self.play(from, to)
    }

    /// [`make_move`](GameEngine::make_move) with squares in board notation.
    /// Malformed notation is rejected like any other illegal move.
    pub fn make_move_notation(&mut self, from: &str, to: &str) -> bool {
        matches!(self.play_notation(from, to), Ok(outcome) if !outcome.ended_game())
    }
}
