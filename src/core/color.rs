//! Disc colors and cell contents.
//!
//! ## Color
//!
//! One of the two sides. Black always moves first.
//!
//! ## Cell
//!
//! The content of one board square: empty or a disc of some color.

use serde::{Deserialize, Serialize};

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors, in move order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Get the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The cell a disc of this color occupies.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }

    /// Diagram symbol for this color's discs.
    #[must_use]
    pub const fn symbol(self) -> char {
        self.cell().symbol()
    }
}

impl Default for Color {
    /// Black moves first.
    fn default() -> Self {
        Color::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

/// Content of a single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The color of the disc in this cell, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Diagram symbol: `X` for Black, `O` for White, `.` for empty.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }

    /// Parse a diagram symbol. Accepts `X`/`B`/`#`/`*` for Black,
    /// `O`/`W` for White and `.`/`-`/`_` for empty (case-insensitive).
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'X' | 'B' | '#' | '*' => Some(Cell::Black),
            'O' | 'W' => Some(Cell::White),
            '.' | '-' | '_' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        color.cell()
    }
}
