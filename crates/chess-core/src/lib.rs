//! Core types for the chess rules engine.
//!
//! This crate provides the value types shared by the engine and its hosts:
//! - [`Color`] for the two sides
//! - [`Square`] for `(row, col)` board coordinates
//! - [`PieceKind`] and [`Piece`] for piece representation
//! - [`Move`] for a `from`/`to` pair
//!
//! Row 0 is White's back rank and row 7 is Black's.

mod color;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
