//! Per-piece movement rules.
//!
//! A rule only answers whether a piece could geometrically travel to a
//! square on the given board. Turn order, landing on a friendly piece, and
//! king safety are the arbiter's concern (see [`Game`](crate::Game)).

use crate::board::{Board, Directions};
use chess_core::{Piece, PieceKind, Square};

/// Returns the line directions a sliding piece travels along, or `None`
/// for pieces that do not slide.
pub const fn directions(kind: PieceKind) -> Option<Directions> {
    match kind {
        PieceKind::Rook => Some(Directions::ORTHOGONAL),
        PieceKind::Bishop => Some(Directions::DIAGONAL),
        PieceKind::Queen => Some(Directions::ALL),
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => None,
    }
}

/// Returns true if `piece` may move to `to` by its movement pattern.
///
/// A piece never reaches its own square.
pub fn can_reach(board: &Board, piece: &Piece, to: Square) -> bool {
    let from = piece.position;
    if from == to {
        return false;
    }
    let (drow, dcol) = Square::delta(from, to);
    match piece.kind {
        PieceKind::Pawn => pawn_can_reach(board, piece, to, drow, dcol),
        PieceKind::Knight => matches!((drow.abs(), dcol.abs()), (2, 1) | (1, 2)),
        PieceKind::King => drow.abs().max(dcol.abs()) == 1,
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => directions(piece.kind)
            .is_some_and(|allowed| board.is_clear_path(from, to, allowed)),
    }
}

/// Returns true if `piece` would reach `to` with every other piece removed.
///
/// Used to tell a blocked move apart from one the piece can never make.
pub fn reaches_on_empty_board(piece: &Piece, to: Square) -> bool {
    let mut board = Board::empty();
    board.set_piece(piece.position, Some(*piece));
    can_reach(&board, piece, to)
}

fn pawn_can_reach(board: &Board, pawn: &Piece, to: Square, drow: i8, dcol: i8) -> bool {
    let direction = pawn.color.pawn_direction();

    if dcol == 0 && board.is_empty(to) {
        if drow == direction {
            return true;
        }
        // The double step is gated on has_moved alone, not on the rank.
        if !pawn.has_moved && drow == 2 * direction {
            return pawn
                .position
                .offset(direction, 0)
                .is_some_and(|mid| board.is_empty(mid));
        }
    }

    if dcol.abs() == 1 && drow == direction {
        return board
            .get_piece(to)
            .is_some_and(|target| target.color != pawn.color);
    }

    false
}
