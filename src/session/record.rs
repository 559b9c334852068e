//! Match log entries.
//!
//! The board itself keeps no history. A match records what happened,
//! including passes, for replay and display.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Square};

/// An action in a game: place a disc or pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Place(Square),
    Pass,
}

impl From<Square> for Action {
    fn from(square: Square) -> Self {
        Action::Place(square)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(sq) => write!(f, "{}", sq),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// One entry of the match log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Sequence number in the log, starting at 0. Passes get their own entry.
    pub sequence: u32,

    /// The side that acted.
    pub color: Color,

    pub action: Action,

    /// Discs flipped; always 0 for a pass.
    pub flipped: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(sequence: u32, color: Color, action: Action, flipped: u32) -> Self {
        Self {
            sequence,
            color,
            action,
            flipped,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.action == Action::Pass
    }
}
