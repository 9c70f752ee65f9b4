use super::rules::{Rules, PIECES_PER_SIDE, WINNING_CAPTURES};
use super::{Color, Piece, Square, Status, BOARD_SIZE, NUM_SQUARES};

/// The rules authority for one game of Hasami Shogi.
///
/// Owns every live piece, whose turn it is, the capture counters and the
/// game status. All mutation goes through [`GameEngine::make_move`] /
/// [`GameEngine::play`], which either apply a move completely or leave the
/// engine untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) squares: [Option<Piece>; NUM_SQUARES],
    pub(crate) turn: Color,
    pub(crate) status: Status,
    pub(crate) captured: [usize; 2],
    pub(crate) live: [usize; 2],
    pub(crate) rules: Rules,
}

impl GameEngine {
    /// Standard starting position under the default rules: Red on row a,
    /// Black on row i, Black to move.
    ///
    /// Corner capture is on under the default rules; use
    /// [`GameEngine::with_rules`] to play the purely directional variant.
    pub fn new() -> Self {
        GameEngine::with_rules(Rules::default())
    }

    /// Standard starting position under `rules`.
    pub fn with_rules(rules: Rules) -> Self {
        let mut engine = GameEngine::empty(rules);
        for color in Color::BOTH {
            for col in 0..BOARD_SIZE {
                if let Some(sq) = Square::new(color.home_row(), col) {
                    engine.set_piece(sq, color);
                }
            }
        }
        engine.refresh_counters();
        engine
    }

    pub(crate) fn empty(rules: Rules) -> Self {
        GameEngine {
            squares: [None; NUM_SQUARES],
            turn: rules.first_to_move,
            status: Status::InProgress,
            captured: [0, 0],
            live: [0, 0],
            rules,
        }
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of `color` pieces removed from the board so far.
    #[inline]
    pub fn captured_count(&self, color: Color) -> usize {
        self.captured[color.index()]
    }

    /// Number of `color` pieces still on the board.
    #[inline]
    pub fn piece_count(&self, color: Color) -> usize {
        self.live[color.index()]
    }

    /// Color of the piece on `square`, or `None` if it is empty.
    #[inline]
    pub fn occupant_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(Piece::color)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.index()].as_ref()
    }

    /// All live pieces in square index order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten()
    }

    pub(crate) fn set_piece(&mut self, square: Square, color: Color) {
        self.squares[square.index()] = Some(Piece::new(color, square));
    }

    pub(crate) fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Recount live pieces and derive captures and status from them.
    pub(crate) fn refresh_counters(&mut self) {
        self.live = [0, 0];
        for piece in self.squares.iter().flatten() {
            self.live[piece.color().index()] += 1;
        }
        for color in Color::BOTH {
            self.captured[color.index()] = PIECES_PER_SIDE.saturating_sub(self.live[color.index()]);
        }
        self.status = self.decided_status();
    }

    /// Status implied by the capture counters alone.
    pub(crate) fn decided_status(&self) -> Status {
        Color::BOTH
            .into_iter()
            .find(|&color| self.captured_count(color) >= WINNING_CAPTURES)
            .map_or(Status::InProgress, |loser| Status::won_by(loser.opponent()))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new()
    }
}
