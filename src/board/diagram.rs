//! Text diagrams of positions.
//!
//! Rendering:
//!
//! ```text
//!   a b c d
//! 1 . . . .
//! 2 . O X .
//! 3 . X O .
//! 4 . . . .
//! ```
//!
//! Parsing accepts the same layout. The column header and row numbers are
//! optional, whitespace between cells is ignored and blank lines are skipped.

use std::fmt;
use std::str::FromStr;

use crate::core::{Cell, Color, ParseError};

use super::engine::Board;

impl Board {
    /// Build a board from a diagram with `to_move` to play.
    ///
    /// The position is settled like [`Board::from_cells`]: a side with no
    /// legal move is skipped.
    pub fn from_diagram(diagram: &str, to_move: Color) -> Result<Self, ParseError> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();

        for (line_no, line) in diagram.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || is_header(line) {
                continue;
            }

            let body = line.trim_start_matches(|c: char| c.is_ascii_digit());
            let row = body
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|symbol| {
                    Cell::from_symbol(symbol).ok_or(ParseError::Symbol {
                        symbol,
                        line: line_no + 1,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(ParseError::RowLength {
                        line: line_no + 1,
                        found: row.len(),
                        expected: first.len(),
                    });
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(ParseError::Empty);
        }

        let size = rows.len();
        if rows[0].len() != size {
            return Err(ParseError::RowLength {
                line: 1,
                found: rows[0].len(),
                expected: size,
            });
        }

        let cells = rows.into_iter().flatten().collect();
        Ok(Self::from_cells(size, cells, to_move)?)
    }
}

/// A column header line: letters only, starting at `a`.
fn is_header(line: &str) -> bool {
    let mut letters = line.chars().filter(|c| !c.is_whitespace());
    matches!(letters.next(), Some('a' | 'A')) && letters.all(|c| c.is_ascii_alphabetic())
}

/// Parse a diagram with Black to move.
impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_diagram(s, Color::Black)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.size().to_string().len();

        if self.size() <= 26 {
            write!(f, "{:width$}", "", width = label_width)?;
            for col in 0..self.size() {
                write!(f, " {}", (b'a' + col as u8) as char)?;
            }
            writeln!(f)?;
        }

        for (r, row) in self.rows().enumerate() {
            write!(f, "{:>width$}", r + 1, width = label_width)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
