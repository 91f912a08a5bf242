//! Host-facing entry points.
//!
//! A presentation layer (terminal, GUI, web) drives the engine through these
//! functions only. Payloads are serde-serializable so they can cross a
//! process or network boundary unchanged.

use crate::game::{Game, MoveOutcome};
use chess_core::{Color, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// What a renderer needs to know about an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub color: Color,
}

impl PieceView {
    /// Returns the Unicode glyph for this piece.
    pub const fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }
}

/// Starts a game from the standard placement.
pub fn new_game() -> Game {
    Game::new()
}

/// Attempts the move `from` -> `to` for the side to move.
pub fn attempt_move(game: &mut Game, from: Square, to: Square) -> MoveOutcome {
    game.attempt_move(from, to)
}

/// Returns the piece on `square` for rendering.
pub fn piece_at(game: &Game, square: Square) -> Option<PieceView> {
    game.piece_at(square).map(|p| PieceView {
        kind: p.kind,
        color: p.color,
    })
}
