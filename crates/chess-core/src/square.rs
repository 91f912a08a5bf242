//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the board, addressed by `(row, col)` with both in `0..8`.
///
/// Squares are stored as a single index in row-major order:
/// - `(0, 0)` = 0, `(0, 7)` = 7
/// - `(1, 0)` = 8, ..., `(7, 7)` = 63
///
/// Row 0 holds White's back rank. For diagnostics a square prints as a
/// file letter plus rank digit, so `(0, 4)` prints as `e1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Creates a square from row and column.
    ///
    /// # Panics
    /// Panics if either coordinate is outside `0..8`. Out-of-range
    /// coordinates are a caller bug; use [`Square::try_new`] for input that
    /// has not been checked yet.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates out of range");
        Square(row * 8 + col)
    }

    /// Creates a square from row and column, or `None` if out of range.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square(row as u8 * 8 + col as u8))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Iterates every square, row 0 first, columns ascending within a row.
    pub fn all() -> impl Iterator<Item = Square> + Clone {
        (0..64u8).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square displaced by `(drow, dcol)`, if it is on the board.
    #[inline]
    pub const fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        Square::try_new(self.row() as i8 + drow, self.col() as i8 + dcol)
    }

    /// Returns `(to.row - from.row, to.col - from.col)`.
    #[inline]
    pub const fn delta(from: Square, to: Square) -> (i8, i8) {
        (
            to.row() as i8 - from.row() as i8,
            to.col() as i8 - from.col() as i8,
        )
    }
}

impl TryFrom<u8> for Square {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::from_index(index).ok_or_else(|| format!("square index {} out of range", index))
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {} = {})", self.row(), self.col(), self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = (b'1' + self.row()) as char;
        write!(f, "{}{}", file, rank)
    }
}
