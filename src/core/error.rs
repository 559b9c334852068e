//! Error types.
//!
//! Every error leaves the board untouched: a rejected move performs no
//! mutation at all.

use thiserror::Error;

use super::color::Color;
use super::square::Square;

/// Invalid board configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size must be an even number of at least 4, got {size}")]
    InvalidSize { size: usize },

    #[error("position has {cells} cells, expected {expected} for a {size}x{size} board")]
    CellCount {
        size: usize,
        cells: usize,
        expected: usize,
    },
}

/// Why a move was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("{square} is off a {size}x{size} board")]
    OutOfBounds { square: Square, size: usize },

    #[error("{square} is already occupied")]
    Occupied { square: Square },

    #[error("{square} does not flank any {opponent} disc")]
    NoFlank { square: Square, opponent: Color },

    #[error("it is {expected}'s turn, not {got}'s")]
    OutOfTurn { expected: Color, got: Color },

    #[error("the game is over")]
    GameOver,
}

/// Malformed square notation or board diagram.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square notation {0:?}")]
    Square(String),

    #[error("invalid board symbol {symbol:?} on line {line}")]
    Symbol { symbol: char, line: usize },

    #[error("board row {line} has {found} cells, expected {expected}")]
    RowLength {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("board diagram has no rows")]
    Empty,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
