//! # rust-othello
//!
//! An Othello (Reversi) rule engine for any even board size from 4x4 up.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: The board knows what is legal and what happens when a
//!    move is made. It never chooses moves; that is a [`MovePolicy`]'s job.
//!
//! 2. **Always Settled**: After every mutation the board has already applied
//!    the pass rule and cached the legal moves of the side to move. A board
//!    whose side to move has no legal move is, by construction, finished.
//!
//! 3. **Cheap Copies**: [`Board::copy`] yields a fully independent board so
//!    search code can simulate freely without touching the live game.
//!
//! ## Modules
//!
//! - `core`: Colors, cells, squares, configuration, errors, RNG
//! - `board`: The board, move generation and flipping, text diagrams
//! - `rules`: Scores, winners, turn transitions
//! - `policy`: The move-selection capability and a random baseline
//! - `session`: Running a match between two policies
//! - `perft`: Move-tree leaf counts for verification and benchmarking
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use rust_othello::{Board, Color, NextTurn};
//!
//! let mut board = Board::new(8).unwrap();
//! assert_eq!(board.valid_moves(Color::Black).len(), 4);
//!
//! let outcome = board.make_move(2, 3, Color::Black).unwrap();
//! assert_eq!(outcome.flip_count(), 1);
//! assert_eq!(outcome.next, NextTurn::Opponent(Color::White));
//! let (black, white): (usize, usize) = board.score().into();
//! assert_eq!((black, white), (4, 1));
//! ```

pub mod board;
pub mod core;
pub mod perft;
pub mod policy;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Cell, Color, ConfigError, Direction, GameRng, GameRngState, MoveError,
    ParseError, Square, MIN_SIZE, STANDARD_SIZE,
};

pub use crate::board::{Board, Flips, MoveOutcome, MoveSet};

pub use crate::rules::{GameStatus, NextTurn, Score, Winner};

pub use crate::policy::{random_playout, MovePolicy, RandomPolicy};

pub use crate::session::{Action, Match, MatchConfig, MatchError, MatchResult, MoveRecord};

pub use crate::perft::{perft, perft_memoized, run_perft};
