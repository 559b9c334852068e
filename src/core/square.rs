//! Board coordinates and the eight scan directions.
//!
//! Squares are 0-based `(row, col)` pairs, row-major. Their text form is the
//! usual algebraic notation: a column letter followed by a 1-based row
//! number, so `"d3"` is row 2, column 3.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// A square on the board, 0-based, row-major.
///
/// A `Square` is not tied to a particular board size; boards check bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board with the given edge length.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Square::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The neighbouring square in `direction`, if it lies on a board of `size`.
    #[must_use]
    pub fn step(self, direction: Direction, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(direction.dr as isize)?;
        let col = self.col.checked_add_signed(direction.dc as isize)?;
        let next = Self { row, col };
        next.in_bounds(size).then_some(next)
    }

    /// Iterate over the squares strictly beyond `self` in `direction`,
    /// stopping at the board edge.
    pub fn ray(self, direction: Direction, size: usize) -> impl Iterator<Item = Square> {
        std::iter::successors(self.step(direction, size), move |sq| sq.step(direction, size))
    }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.col < 26 {
            let letter = (b'a' + self.col as u8) as char;
            write!(f, "{}{}", letter, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Parse algebraic notation (`"d3"`, `"F5"`, `"a10"`).
impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(|| ParseError::Square(s.to_string()))?;
        let col = (letter.to_ascii_lowercase() as u8 - b'a') as usize;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::Square(s.to_string()));
        }
        let row: usize = digits
            .parse()
            .map_err(|_| ParseError::Square(s.to_string()))?;
        if row == 0 {
            return Err(ParseError::Square(s.to_string()));
        }

        Ok(Self { row: row - 1, col })
    }
}

/// One of the eight compass directions, as a `(row, col)` delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const NORTH_WEST: Self = Self { dr: -1, dc: -1 };
    pub const NORTH: Self = Self { dr: -1, dc: 0 };
    pub const NORTH_EAST: Self = Self { dr: -1, dc: 1 };
    pub const WEST: Self = Self { dr: 0, dc: -1 };
    pub const EAST: Self = Self { dr: 0, dc: 1 };
    pub const SOUTH_WEST: Self = Self { dr: 1, dc: -1 };
    pub const SOUTH: Self = Self { dr: 1, dc: 0 };
    pub const SOUTH_EAST: Self = Self { dr: 1, dc: 1 };

    pub const ALL: [Direction; 8] = [
        Self::NORTH_WEST,
        Self::NORTH,
        Self::NORTH_EAST,
        Self::WEST,
        Self::EAST,
        Self::SOUTH_WEST,
        Self::SOUTH,
        Self::SOUTH_EAST,
    ];
}
