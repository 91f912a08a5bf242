//! Turn order, move legality, check and checkmate.
//!
//! [`Game`] is the arbiter: it owns the live [`Board`], decides which side
//! moves, filters pattern-valid moves through a king-safety trial on a
//! scratch copy of the board, and reports check and checkmate.

use crate::board::Board;
use crate::rules;
use chess_core::{Color, Move, Piece, PieceKind, Square};
use thiserror::Error;
use tracing::{debug, info, trace};

/// Why a move was rejected.
///
/// Every variant is a plain "no"; callers that only care about acceptance
/// can use [`Game::is_valid_move`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended in checkmate.
    #[error("game is over")]
    GameOver,

    /// The origin square is empty.
    #[error("no piece on {0}")]
    NoPiece(Square),

    /// The piece belongs to the side not on move.
    #[error("it is not {0}'s turn")]
    WrongTurn(Color),

    /// The piece never moves that way, whatever the board holds.
    #[error("{0} cannot move like that")]
    IllegalPattern(PieceKind),

    /// The piece could move that way on an empty board, but something is in the way.
    #[error("{0} is blocked on the way to {1}")]
    Blocked(PieceKind, Square),

    /// The target holds a piece of the mover's own color.
    #[error("{0} is occupied by a friendly piece")]
    FriendlyCapture(Square),

    /// The move would leave the mover's king attacked.
    #[error("move would leave the {0} king in check")]
    SelfCheck(Color),
}

/// Errors building a game from a custom board.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SetupError {
    /// A side has no king, or more than one.
    #[error("expected exactly one {color} king, found {found}")]
    KingCount { color: Color, found: usize },

    /// The side not on move is already in check, so its king could be taken.
    #[error("{color} is in check but it is not {color}'s turn")]
    OpponentInCheck { color: Color },
}

/// Whether the game still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Moves are still accepted.
    InProgress,
    /// The side to move has been mated by `winner`.
    Checkmate { winner: Color },
}

/// Result of a move attempt, as seen by the host.
///
/// `check` and `checkmate` describe the side to move after the call, which
/// is `next_player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MoveOutcome {
    /// Whether the move was played.
    pub accepted: bool,
    /// Whether `next_player` is in check.
    pub check: bool,
    /// Whether `next_player` is checkmated.
    pub checkmate: bool,
    /// The side to move after the call.
    pub next_player: Color,
}

/// A two-player game on one board.
///
/// All queries are pure reads; only accepted moves mutate the game. A game
/// is a single-writer value: a host sharing one across threads must
/// serialize every call itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    status: Status,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game with the standard starting placement, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            side_to_move: Color::White,
            status: Status::InProgress,
        }
    }

    /// Creates a game from a custom placement.
    ///
    /// Each side must have exactly one king, and the side not on move must
    /// not be in check. A position that is already checkmate starts out
    /// finished.
    pub fn from_board(board: Board, side_to_move: Color) -> Result<Self, SetupError> {
        for color in Color::ALL {
            let found = board.count(PieceKind::King, color);
            if found != 1 {
                return Err(SetupError::KingCount { color, found });
            }
        }
        let waiting = side_to_move.opposite();
        if is_in_check(&board, waiting) {
            return Err(SetupError::OpponentInCheck { color: waiting });
        }

        let mut game = Game {
            board,
            side_to_move,
            status: Status::InProgress,
        };
        if game.is_checkmate() {
            game.status = Status::Checkmate {
                winner: side_to_move.opposite(),
            };
        }
        Ok(game)
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side whose move it is.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true once checkmate has been reached.
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Returns the winner of a finished game.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            Status::InProgress => None,
            Status::Checkmate { winner } => Some(winner),
        }
    }

    /// Returns the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get_piece(sq)
    }

    /// Returns true if moving the piece on `from` to `to` is legal now.
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        self.validate(from, to).is_ok()
    }

    /// Checks a move and reports why it is illegal.
    pub fn validate(&self, from: Square, to: Square) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        self.check_legal(from, to)
    }

    /// Returns true if `color`'s king is attacked on the live board.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    /// Returns true if the side to move is in check and has no legal move.
    pub fn is_checkmate(&self) -> bool {
        if !self.is_check() {
            return false;
        }
        !Square::all()
            .any(|from| Square::all().any(|to| self.check_legal(from, to).is_ok()))
    }

    /// Returns every legal move for the side to move, grouped by origin
    /// square in scan order.
    pub fn legal_moves(&self) -> Vec<Move> {
        Square::all()
            .flat_map(|from| self.legal_moves_from(from))
            .collect()
    }

    /// Returns the legal moves of the piece on `from`.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        match self.board.get_piece(from) {
            Some(piece) if piece.color == self.side_to_move => Square::all()
                .filter(|&to| self.check_legal(from, to).is_ok())
                .map(|to| Move::new(from, to))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Plays a move if it is legal, returning the outcome for the host.
    ///
    /// A rejected move leaves the game untouched.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        match self.try_move(from, to) {
            Ok(outcome) => outcome,
            Err(_) => MoveOutcome {
                accepted: false,
                check: self.is_check(),
                checkmate: self.is_over(),
                next_player: self.side_to_move,
            },
        }
    }

    /// Plays a move if it is legal, or returns the reason it is not.
    ///
    /// After an accepted move the turn passes to the opponent, whose check
    /// and checkmate state is then reported. Checkmate ends the game.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if let Err(reason) = self.validate(from, to) {
            trace!(%from, %to, %reason, "move rejected");
            return Err(reason);
        }

        let mover = self.side_to_move;
        let captured = self.make_move(from, to);
        debug!(
            color = %mover,
            %from,
            %to,
            captured = ?captured.map(|p| p.kind),
            "move played"
        );
        self.side_to_move = mover.opposite();

        let check = self.is_check();
        let checkmate = check && self.is_checkmate();
        if checkmate {
            self.status = Status::Checkmate { winner: mover };
            info!(winner = %mover, "checkmate");
        } else if check {
            info!(color = %self.side_to_move, "check");
        }

        Ok(MoveOutcome {
            accepted: true,
            check,
            checkmate,
            next_player: self.side_to_move,
        })
    }

    /// Relocates a piece without any legality check, marking it as moved.
    fn make_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        let captured = self.board.relocate(from, to);
        if let Some(mut piece) = self.board.get_piece(to) {
            piece.has_moved = true;
            self.board.set_piece(to, Some(piece));
        }
        captured
    }

    fn check_legal(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self.board.get_piece(from).ok_or(MoveError::NoPiece(from))?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongTurn(piece.color));
        }

        if !rules::can_reach(&self.board, &piece, to) {
            return Err(if rules::reaches_on_empty_board(&piece, to) {
                MoveError::Blocked(piece.kind, to)
            } else {
                MoveError::IllegalPattern(piece.kind)
            });
        }

        if self.board.get_piece(to).is_some_and(|target| target.color == piece.color) {
            return Err(MoveError::FriendlyCapture(to));
        }

        let mut scratch = self.board.clone();
        scratch.relocate(from, to);
        if is_in_check(&scratch, piece.color) {
            return Err(MoveError::SelfCheck(piece.color));
        }

        Ok(())
    }
}

/// Returns true if any opposing piece's movement pattern reaches `color`'s
/// king on `board`.
///
/// # Panics
/// Panics if `color` has no king on the board.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        panic!("board has no {} king", color);
    };
    board
        .pieces()
        .filter(|p| p.color != color)
        .any(|p| rules::can_reach(board, p, king))
}
