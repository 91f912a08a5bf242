//! Mailbox board representation.

use chess_core::{Color, Piece, PieceKind, Square};
use std::fmt;
use std::ops::BitOr;

/// Set of line directions a sliding piece may travel along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directions(u8);

impl Directions {
    pub const NONE: Directions = Directions(0);
    /// Same row.
    pub const HORIZONTAL: Directions = Directions(0b001);
    /// Same column.
    pub const VERTICAL: Directions = Directions(0b010);
    /// Equal row and column distance.
    pub const DIAGONAL: Directions = Directions(0b100);
    pub const ORTHOGONAL: Directions = Directions(0b011);
    pub const ALL: Directions = Directions(0b111);

    /// Returns true if every direction in `other` is in `self`.
    #[inline]
    pub const fn contains(self, other: Directions) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two sets.
    #[inline]
    pub const fn union(self, other: Directions) -> Directions {
        Directions(self.0 | other.0)
    }

    /// Classifies the line from `start` to `end`, if they share one.
    ///
    /// Returns `None` for a zero displacement or for squares that share no
    /// row, column, or diagonal.
    pub const fn between(start: Square, end: Square) -> Option<Directions> {
        let (drow, dcol) = Square::delta(start, end);
        if drow == 0 && dcol == 0 {
            None
        } else if drow == 0 {
            Some(Directions::HORIZONTAL)
        } else if dcol == 0 {
            Some(Directions::VERTICAL)
        } else if drow.abs() == dcol.abs() {
            Some(Directions::DIAGONAL)
        } else {
            None
        }
    }
}

impl BitOr for Directions {
    type Output = Directions;

    fn bitor(self, rhs: Directions) -> Directions {
        self.union(rhs)
    }
}

/// An 8x8 grid holding at most one piece per square.
///
/// Pieces are plain values, so cloning a board yields a fully independent
/// copy that can be mutated for trial moves without touching the original.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Creates the standard starting placement.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for color in Color::ALL {
                let back = Square::new(color.back_rank(), col);
                let pawns = Square::new(color.pawn_rank(), col);
                board.set_piece(back, Some(Piece::new(kind, color, back)));
                board.set_piece(pawns, Some(Piece::new(PieceKind::Pawn, color, pawns)));
            }
        }
        board
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index() as usize]
    }

    /// Places `piece` on `sq`, overwriting any occupant.
    ///
    /// A placed piece has its `position` rewritten to `sq`.
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index() as usize] = piece.map(|mut p| {
            p.position = sq;
            p
        });
    }

    /// Returns true if no piece stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get_piece(sq).is_none()
    }

    /// Removes and returns the piece on `sq`.
    pub fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index() as usize].take()
    }

    /// Moves the occupant of `from` onto `to` and returns whatever stood on
    /// `to` before. Does nothing if `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.take_piece(from)?;
        let captured = self.take_piece(to);
        self.set_piece(to, Some(piece));
        captured
    }

    /// Returns true if `start` and `end` lie on a line in one of the
    /// `allowed` directions with every square strictly between them empty.
    ///
    /// The occupancy of `start` and `end` themselves is not considered.
    pub fn is_clear_path(&self, start: Square, end: Square, allowed: Directions) -> bool {
        match Directions::between(start, end) {
            Some(direction) if allowed.contains(direction) => {}
            _ => return false,
        }

        let (drow, dcol) = Square::delta(start, end);
        let (step_row, step_col) = (drow.signum(), dcol.signum());
        let distance = drow.abs().max(dcol.abs());
        (1..distance).all(|i| {
            start
                .offset(i * step_row, i * step_col)
                .is_some_and(|sq| self.is_empty(sq))
        })
    }

    /// Returns the square of the first `color` king in scan order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|p| p.kind == PieceKind::King && p.color == color)
            .map(|p| p.position)
    }

    /// Iterates the pieces on the board in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten()
    }

    /// Counts the pieces of the given kind and color.
    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces()
            .filter(|p| p.kind == kind && p.color == color)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8 {
                let glyph = self
                    .get_piece(Square::new(row, col))
                    .map_or('.', |p| p.symbol());
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        write!(f, "{}", self)
    }
}
