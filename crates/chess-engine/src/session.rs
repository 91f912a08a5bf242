//! Click-to-select interaction flow.
//!
//! [`Session`] turns a stream of square picks into moves: the first pick
//! selects one of the mover's pieces, the second tries to move it there.
//! It holds no display state; a host maps its own input to squares.

use crate::game::{Game, MoveError, MoveOutcome};
use chess_core::{Color, Square};
use tracing::debug;

/// Where the selection flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the side to move to pick one of its pieces.
    AwaitingSelection,
    /// A piece is selected; the next pick is its destination.
    PieceSelected(Square),
    /// Checkmate was reached; picks are ignored.
    GameOver { winner: Color },
}

/// What a single pick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing selectable was picked, or the game is over.
    Ignored,
    /// A piece of the side to move is now selected.
    Selected(Square),
    /// The selected piece moved.
    Moved(MoveOutcome),
    /// The move was illegal; the selection has been cleared.
    Rejected(MoveError),
}

/// A game plus the pending selection of one player.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Game::new())
    }
}

impl Session {
    pub fn new(game: Game) -> Self {
        let state = match game.winner() {
            Some(winner) => SessionState::GameOver { winner },
            None => SessionState::AwaitingSelection,
        };
        Session { game, state }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the currently selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        match self.state {
            SessionState::PieceSelected(sq) => Some(sq),
            _ => None,
        }
    }

    /// Handles a pick of `square`.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        match self.state {
            SessionState::GameOver { .. } => ClickOutcome::Ignored,
            SessionState::AwaitingSelection => {
                let own_piece = self
                    .game
                    .piece_at(square)
                    .is_some_and(|p| p.color == self.game.side_to_move());
                if own_piece {
                    debug!(%square, "piece selected");
                    self.state = SessionState::PieceSelected(square);
                    ClickOutcome::Selected(square)
                } else {
                    ClickOutcome::Ignored
                }
            }
            SessionState::PieceSelected(from) => {
                self.state = SessionState::AwaitingSelection;
                match self.game.try_move(from, square) {
                    Ok(outcome) => {
                        if let Some(winner) = self.game.winner() {
                            self.state = SessionState::GameOver { winner };
                        }
                        ClickOutcome::Moved(outcome)
                    }
                    Err(reason) => ClickOutcome::Rejected(reason),
                }
            }
        }
    }
}
