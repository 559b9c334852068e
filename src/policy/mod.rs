//! Move selection as a pluggable capability.
//!
//! The engine never chooses moves. Whatever does (a human at a UI, a
//! minimax search, MCTS) implements [`MovePolicy`]: given read access to the
//! live board and the color to play, return a legal square or `None` when
//! that color has no move.
//!
//! A policy that wants to look ahead must work on [`Board::copy`]s; it only
//! ever receives a shared reference to the real game.
//!
//! ```
//! use rust_othello::{Board, Color, MovePolicy, Square};
//!
//! // Any closure of the right shape is a policy.
//! let mut first_legal = |board: &Board, _color: Color| -> Option<Square> {
//!     board.legal_moves().iter().next().copied()
//! };
//!
//! let board = Board::new(8).unwrap();
//! assert_eq!(first_legal.choose_move(&board, Color::Black), Some(Square::new(2, 3)));
//! ```

use crate::board::Board;
use crate::core::{Color, GameRng, Square};

/// Chooses a move for one side.
pub trait MovePolicy: Send {
    /// Pick a square `color` may legally play on `board`, or `None` if it
    /// has no legal move.
    ///
    /// Must never return a square rejected by [`Board::is_valid_move`].
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Square>;

    /// Short label for logs.
    fn name(&self) -> &str {
        "policy"
    }
}

impl<F> MovePolicy for F
where
    F: FnMut(&Board, Color) -> Option<Square> + Send,
{
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Square> {
        self(board, color)
    }

    fn name(&self) -> &str {
        "closure"
    }
}

/// Uniformly random legal moves from a seeded stream.
///
/// Two policies built with the same seed make the same choices on the same
/// positions.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Square> {
        let moves = board.valid_moves(color);
        self.rng.choose(moves.as_slice()).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Play uniformly random moves on a copy of `board` until the game ends.
///
/// Returns the finished copy; `board` itself is untouched.
#[must_use]
pub fn random_playout(board: &Board, rng: &mut GameRng) -> Board {
    let mut sim = board.copy();
    while !sim.is_game_over() {
        let Some(&square) = rng.choose(sim.legal_moves().as_slice()) else {
            break;
        };
        if sim.play(square).is_err() {
            break;
        }
    }
    sim
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_policy_returns_legal_moves() {
        let board = Board::new(8).unwrap();
        let mut policy = RandomPolicy::new(42);

        for _ in 0..20 {
            let sq = policy.choose_move(&board, Color::Black).unwrap();
            assert!(board.is_valid_move(sq.row, sq.col, Color::Black));
        }
    }

    #[test]
    fn test_random_policy_none_without_moves() {
        let board = Board::from_diagram(
            "
            X . . .
            . . . .
            . . . .
            . . . O
            ",
            Color::Black,
        )
        .unwrap();
        let mut policy = RandomPolicy::new(1);
        assert_eq!(policy.choose_move(&board, Color::Black), None);
        assert_eq!(policy.choose_move(&board, Color::White), None);
    }

    #[test]
    fn test_random_policy_is_seeded() {
        let board = Board::new(8).unwrap();
        let mut a = RandomPolicy::new(9);
        let mut b = RandomPolicy::new(9);

        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&board, Color::Black),
                b.choose_move(&board, Color::Black)
            );
        }
    }

    #[test]
    fn test_closure_policy() {
        let board = Board::new(6).unwrap();
        let mut last = |b: &Board, c: Color| b.valid_moves(c).into_iter().last();
        let sq = last.choose_move(&board, Color::White).unwrap();
        assert!(board.is_valid_move(sq.row, sq.col, Color::White));
        assert_eq!(last.name(), "closure");
    }

    #[test]
    fn test_boxed_policy() {
        let board = Board::new(8).unwrap();
        let mut boxed: Box<dyn MovePolicy> = Box::new(RandomPolicy::new(3));
        assert_eq!(boxed.name(), "random");
        assert!(boxed.choose_move(&board, Color::Black).is_some());
    }

    #[test]
    fn test_random_playout_leaves_source_alone() {
        let board = Board::new(6).unwrap();
        let mut rng = GameRng::new(5);

        let finished = random_playout(&board, &mut rng);

        assert!(finished.is_game_over());
        assert_eq!(board, Board::new(6).unwrap());
        assert!(finished.score().total() > 4);
    }
}
