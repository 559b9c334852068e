//! Drives one game between two policies.
//!
//! The match owns the live board. Policies only see `&Board`; every move
//! they return is checked against the rules before it is applied, and a
//! policy that breaks its contract ends the match with an error.

use im::Vector;
use log::debug;
use thiserror::Error;

use crate::board::{Board, MoveOutcome};
use crate::core::{Color, ConfigError, MoveError, Square};
use crate::policy::MovePolicy;
use crate::rules::{NextTurn, Score, Winner};

use super::config::MatchConfig;
use super::record::{Action, MoveRecord};

/// A policy broke its contract, or the board rejected a move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("{color} policy passed with {available} legal moves available")]
    PolicyPassed { color: Color, available: usize },

    #[error("{color} policy chose illegal move {square}")]
    PolicyIllegalMove { color: Color, square: Square },

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Summary of a completed (or ply-limited) match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Winner,
    pub score: Score,
    /// Placements made.
    pub plies: usize,
    /// Forced passes.
    pub passes: usize,
    /// False if the ply limit stopped the match early.
    pub finished: bool,
}

/// A game in progress between two policies.
pub struct Match {
    board: Board,
    black: Box<dyn MovePolicy>,
    white: Box<dyn MovePolicy>,
    config: MatchConfig,
    log: Vector<MoveRecord>,
    plies: usize,
    passes: usize,
}

impl Match {
    /// Start a match from the standard opening.
    pub fn new(
        config: MatchConfig,
        black: impl MovePolicy + 'static,
        white: impl MovePolicy + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::with_config(&config.board)?;
        Ok(Self::from_board(board, config, black, white))
    }

    /// Start a match from an arbitrary position.
    ///
    /// The board's size takes precedence over `config.board`.
    pub fn from_board(
        board: Board,
        mut config: MatchConfig,
        black: impl MovePolicy + 'static,
        white: impl MovePolicy + 'static,
    ) -> Self {
        config.board = config.board.with_size(board.size());
        Self {
            board,
            black: Box::new(black),
            white: Box::new(white),
            config,
            log: Vector::new(),
            plies: 0,
            passes: 0,
        }
    }

    /// The live board (read-only).
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Everything played so far. Cloning the log is O(1).
    #[must_use]
    pub fn log(&self) -> &Vector<MoveRecord> {
        &self.log
    }

    #[must_use]
    pub fn plies(&self) -> usize {
        self.plies
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Ask the side to move for a move and apply it.
    ///
    /// Returns `Ok(None)` once the game is over.
    pub fn step(&mut self) -> Result<Option<MoveOutcome>, MatchError> {
        if self.board.is_game_over() {
            return Ok(None);
        }

        let color = self.board.current_player();
        let policy = match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        };

        let square = match policy.choose_move(&self.board, color) {
            Some(square) => square,
            None => {
                return Err(MatchError::PolicyPassed {
                    color,
                    available: self.board.legal_moves().len(),
                })
            }
        };
        if !self.board.is_valid_move(square.row, square.col, color) {
            return Err(MatchError::PolicyIllegalMove { color, square });
        }
        debug!("{} ({}) plays {}", color, policy.name(), square);

        let outcome = self.board.make_move(square.row, square.col, color)?;
        self.plies += 1;
        self.record(color, Action::Place(square), outcome.flip_count() as u32);

        if let NextTurn::Pass(mover) = outcome.next {
            self.passes += 1;
            self.record(mover.opponent(), Action::Pass, 0);
        }

        Ok(Some(outcome))
    }

    /// Step until the game ends or the ply limit is reached.
    pub fn play(&mut self) -> Result<MatchResult, MatchError> {
        while !self.board.is_game_over() && !self.config.limit_reached(self.plies) {
            self.step()?;
        }

        let result = self.result();
        debug!(
            "match ended after {} plies: {} ({})",
            result.plies, result.winner, result.score
        );
        Ok(result)
    }

    /// Current summary; `finished` tells whether it is final.
    #[must_use]
    pub fn result(&self) -> MatchResult {
        MatchResult {
            winner: self.board.winner(),
            score: self.board.score(),
            plies: self.plies,
            passes: self.passes,
            finished: self.board.is_game_over(),
        }
    }

    fn record(&mut self, color: Color, action: Action, flipped: u32) {
        let sequence = self.log.len() as u32;
        self.log
            .push_back(MoveRecord::new(sequence, color, action, flipped));
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("black", &self.black.name())
            .field("white", &self.white.name())
            .field("plies", &self.plies)
            .field("board", &self.board)
            .finish()
    }
}
