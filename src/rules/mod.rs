//! Rule outcomes: scores, winners, turn transitions and game status.
//!
//! The board engine reports results in these terms; presentation and
//! search code never needs to interpret raw disc counts itself.

pub mod outcome;

pub use outcome::{GameStatus, NextTurn, Score, Winner};
