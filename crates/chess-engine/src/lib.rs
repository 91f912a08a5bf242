//! Two-player chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8x8 mailbox board with occupancy and clear-path queries
//! - [`rules`] - movement pattern of each piece kind
//! - [`Game`] - the arbiter: turn order, legality, check and checkmate
//! - [`Session`] - click-to-select flow for interactive hosts
//! - [`new_game`], [`attempt_move`], [`piece_at`] - the host interface
//!
//! The engine covers the two-king subset of chess with check and checkmate.
//! It has no castling, en passant, promotion, or draw rules.
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_engine::{attempt_move, new_game, piece_at};
//!
//! let mut game = new_game();
//! let outcome = attempt_move(&mut game, Square::new(1, 4), Square::new(3, 4));
//! assert!(outcome.accepted);
//! assert!(piece_at(&game, Square::new(3, 4)).is_some());
//! ```
//!
//! # Threading
//!
//! Every type here is a plain owned value. A host that shares a game
//! between threads must serialize all calls into it.

mod api;
mod board;
mod game;
pub mod rules;
mod session;

pub use api::{attempt_move, new_game, piece_at, PieceView};
pub use board::{Board, Directions};
pub use game::{is_in_check, Game, MoveError, MoveOutcome, SetupError, Status};
pub use session::{ClickOutcome, Session, SessionState};
