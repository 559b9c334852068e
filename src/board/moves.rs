//! Move sets and move results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::{Color, Square};
use crate::rules::NextTurn;

/// Discs flipped by one move.
///
/// SmallVec keeps the common case (a handful of flips) off the heap.
pub type Flips = SmallVec<[Square; 16]>;

/// A set of legal moves, ordered row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSet(Vec<Square>);

impl MoveSet {
    /// Build from squares produced in row-major order.
    pub(crate) fn from_sorted(squares: Vec<Square>) -> Self {
        debug_assert!(squares.windows(2).all(|w| w[0] < w[1]));
        Self(squares)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No legal move: the side must pass.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, square: Square) -> bool {
        self.0.binary_search(&square).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.0
    }

    /// Moves as `(row, col)` pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.0.iter().map(|&sq| sq.into()).collect()
    }
}

impl IntoIterator for MoveSet {
    type Item = Square;
    type IntoIter = std::vec::IntoIter<Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, sq) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", sq)?;
        }
        f.write_str("]")
    }
}

/// What a successful move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The side that moved.
    pub color: Color,
    /// Where the disc was placed.
    pub square: Square,
    /// Every disc turned over, grouped by direction.
    pub flipped: Flips,
    /// Turn transfer after the move.
    pub next: NextTurn,
}

impl MoveOutcome {
    #[must_use]
    pub fn flip_count(&self) -> usize {
        self.flipped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(squares: &[(usize, usize)]) -> MoveSet {
        MoveSet::from_sorted(squares.iter().map(|&p| Square::from(p)).collect())
    }

    #[test]
    fn test_contains() {
        let moves = set(&[(2, 3), (3, 2), (4, 5), (5, 4)]);
        assert_eq!(moves.len(), 4);
        assert!(moves.contains(Square::new(3, 2)));
        assert!(!moves.contains(Square::new(3, 3)));
    }

    #[test]
    fn test_empty() {
        let moves = MoveSet::default();
        assert!(moves.is_empty());
        assert!(!moves.contains(Square::new(0, 0)));
        assert_eq!(moves.to_string(), "[]");
    }

    #[test]
    fn test_display_and_pairs() {
        let moves = set(&[(2, 3), (3, 2)]);
        assert_eq!(moves.to_string(), "[d3, c4]");
        assert_eq!(moves.to_pairs(), vec![(2, 3), (3, 2)]);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = MoveOutcome {
            color: Color::Black,
            square: Square::new(2, 3),
            flipped: Flips::from_slice(&[Square::new(3, 3)]),
            next: NextTurn::Opponent(Color::White),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: MoveOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, outcome);
        assert_eq!(deserialized.flip_count(), 1);
    }
}
