//! Scores, winners and turn transitions.
//!
//! These types describe the result of the rules without owning any state:
//! the board produces them, collaborators (UIs, searches) consume them.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Disc counts for both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    /// Disc count for one side.
    #[must_use]
    pub const fn of(self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// Disc difference from `color`'s point of view.
    #[must_use]
    pub fn margin(self, color: Color) -> isize {
        self.of(color) as isize - self.of(color.opponent()) as isize
    }

    #[must_use]
    pub const fn total(self) -> usize {
        self.black + self.white
    }

    /// The side with strictly more discs, or `Tie`.
    #[must_use]
    pub fn winner(self) -> Winner {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Winner::Black,
            std::cmp::Ordering::Less => Winner::White,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }
}

impl From<Score> for (usize, usize) {
    fn from(score: Score) -> Self {
        (score.black, score.white)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Black {} - {} White", self.black, self.white)
    }
}

/// Result of a game, or of the current position if read early.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Black,
    White,
    Tie,
}

impl Winner {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// The winning color, `None` on a tie.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Winner::Black => Some(Color::Black),
            Winner::White => Some(Color::White),
            Winner::Tie => None,
        }
    }
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Winner::Black,
            Color::White => Winner::White,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Black => f.write_str("Black"),
            Winner::White => f.write_str("White"),
            Winner::Tie => f.write_str("Tie"),
        }
    }
}

/// Who moves after a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextTurn {
    /// Normal alternation: the opponent moves next.
    Opponent(Color),
    /// The opponent has no legal move and passes; the mover goes again.
    Pass(Color),
    /// Neither side can move.
    GameOver(Winner),
}

impl NextTurn {
    /// The side to move next, `None` once the game is over.
    #[must_use]
    pub const fn to_move(self) -> Option<Color> {
        match self {
            NextTurn::Opponent(c) | NextTurn::Pass(c) => Some(c),
            NextTurn::GameOver(_) => None,
        }
    }

    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, NextTurn::Pass(_))
    }

    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, NextTurn::GameOver(_))
    }
}

/// Game progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The given side is to move and has at least one legal move.
    InProgress(Color),
    /// Neither side can move.
    Finished(Winner),
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_winner() {
        assert_eq!(Score::new(10, 4).winner(), Winner::Black);
        assert_eq!(Score::new(4, 10).winner(), Winner::White);
        assert_eq!(Score::new(8, 8).winner(), Winner::Tie);
    }

    #[test]
    fn test_score_margin() {
        let score = Score::new(40, 24);
        assert_eq!(score.margin(Color::Black), 16);
        assert_eq!(score.margin(Color::White), -16);
        assert_eq!(score.total(), 64);
        assert_eq!(<(usize, usize)>::from(score), (40, 24));
    }

    #[test]
    fn test_winner_is_winner() {
        assert!(Winner::Black.is_winner(Color::Black));
        assert!(!Winner::Black.is_winner(Color::White));
        assert!(!Winner::Tie.is_winner(Color::Black));
        assert!(!Winner::Tie.is_winner(Color::White));
        assert_eq!(Winner::from(Color::White), Winner::White);
    }

    #[test]
    fn test_next_turn() {
        assert_eq!(NextTurn::Opponent(Color::White).to_move(), Some(Color::White));
        assert_eq!(NextTurn::Pass(Color::Black).to_move(), Some(Color::Black));
        assert!(NextTurn::Pass(Color::Black).is_pass());
        assert_eq!(NextTurn::GameOver(Winner::Tie).to_move(), None);
        assert!(NextTurn::GameOver(Winner::Tie).is_game_over());
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::new(4, 1).to_string(), "Black 4 - 1 White");
        assert_eq!(Winner::Tie.to_string(), "Tie");
    }
}
