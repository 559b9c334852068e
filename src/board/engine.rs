//! The board engine: position, legality, move application, turn transfer.
//!
//! ## Invariants
//!
//! - `size` is even and at least 4.
//! - `current_player` is the side to move. If it has no legal move the game
//!   is over (a side that cannot move while its opponent can is skipped
//!   before control returns to the caller).
//! - `legal_moves` always equals the moves freshly computable for
//!   `current_player`. It is rebuilt on every mutation, so it can never be
//!   observed stale.
//!
//! Mutation happens only through [`Board::make_move`]. Copies are plain
//! value clones: no cell is shared between a board and its copy.

use log::{debug, trace};

use crate::core::{BoardConfig, Cell, Color, ConfigError, Direction, MoveError, Square};
use crate::rules::{GameStatus, NextTurn, Score, Winner};

use super::moves::{Flips, MoveOutcome, MoveSet};

/// An Othello position with the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    current_player: Color,
    legal_moves: MoveSet,
    status: GameStatus,
}

impl Board {
    /// Create a board in the standard opening, Black to move.
    ///
    /// ```
    /// use rust_othello::Board;
    ///
    /// let board = Board::new(8).unwrap();
    /// assert_eq!(board.score().black, 2);
    /// assert_eq!(board.legal_moves().len(), 4);
    /// assert!(Board::new(7).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        Self::with_config(&BoardConfig::new(size)?)
    }

    /// Create a board in the standard opening from a configuration.
    pub fn with_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::settled(config.size, Self::opening_cells(config.size), Color::Black))
    }

    /// Create a board from an explicit row-major position.
    ///
    /// If `to_move` has no legal move but its opponent does, the opponent
    /// becomes the side to move. If neither can move the board starts
    /// finished.
    pub fn from_cells(size: usize, cells: Vec<Cell>, to_move: Color) -> Result<Self, ConfigError> {
        BoardConfig::new(size)?;
        let expected = size * size;
        if cells.len() != expected {
            return Err(ConfigError::CellCount {
                size,
                cells: cells.len(),
                expected,
            });
        }
        Ok(Self::settled(size, cells, to_move))
    }

    /// Empty grid with the four center discs: White on the main diagonal,
    /// Black on the anti-diagonal.
    fn opening_cells(size: usize) -> Vec<Cell> {
        let mut cells = vec![Cell::Empty; size * size];
        let mid = size / 2;
        cells[Square::new(mid - 1, mid - 1).index(size)] = Cell::White;
        cells[Square::new(mid - 1, mid).index(size)] = Cell::Black;
        cells[Square::new(mid, mid - 1).index(size)] = Cell::Black;
        cells[Square::new(mid, mid).index(size)] = Cell::White;
        cells
    }

    fn settled(size: usize, cells: Vec<Cell>, to_move: Color) -> Self {
        let mut board = Self {
            size,
            cells,
            current_player: to_move,
            legal_moves: MoveSet::default(),
            status: GameStatus::InProgress(to_move),
        };

        let moves = board.compute_moves(to_move);
        if !moves.is_empty() {
            board.legal_moves = moves;
            return board;
        }

        let other = to_move.opponent();
        let other_moves = board.compute_moves(other);
        if other_moves.is_empty() {
            let winner = board.winner();
            debug!("position has no legal moves for either side, result {}", winner);
            board.status = GameStatus::Finished(winner);
        } else {
            debug!("{} cannot move in the given position, {} to move", to_move, other);
            board.current_player = other;
            board.legal_moves = other_moves;
            board.status = GameStatus::InProgress(other);
        }
        board
    }

    // === Read access ===

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The side to move. After the game ends this is the last side that moved.
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Content of a square, `None` if off the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        let square = Square::new(row, col);
        square
            .in_bounds(self.size)
            .then(|| self.cells[square.index(self.size)])
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of the grid.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.size).then(|| &self.cells[row * self.size..(row + 1) * self.size])
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.size)
    }

    fn at(&self, square: Square) -> Cell {
        self.cells[square.index(self.size)]
    }

    // === Legality ===

    /// Legal moves of the side to move (cached).
    #[must_use]
    pub fn legal_moves(&self) -> &MoveSet {
        &self.legal_moves
    }

    /// Legal moves for `color`, row-major. Empty means `color` must pass.
    ///
    /// Served from the cache when `color` is the side to move.
    #[must_use]
    pub fn valid_moves(&self, color: Color) -> MoveSet {
        if color == self.current_player {
            self.legal_moves.clone()
        } else {
            self.compute_moves(color)
        }
    }

    /// Whether `color` may legally place a disc at `(row, col)`.
    ///
    /// Agrees exactly with membership in [`Board::valid_moves`]; it does not
    /// look at whose turn it is.
    #[must_use]
    pub fn is_valid_move(&self, row: usize, col: usize, color: Color) -> bool {
        let square = Square::new(row, col);
        if !square.in_bounds(self.size) || !self.at(square).is_empty() {
            return false;
        }
        if color == self.current_player {
            return self.legal_moves.contains(square);
        }
        self.flanks_any(square, color)
    }

    /// The discs `color` would flip by playing `(row, col)`. Empty iff the
    /// move is illegal.
    #[must_use]
    pub fn flips_for(&self, row: usize, col: usize, color: Color) -> Flips {
        let square = Square::new(row, col);
        if !square.in_bounds(self.size) || !self.at(square).is_empty() {
            return Flips::new();
        }
        self.collect_flips(square, color)
    }

    fn compute_moves(&self, color: Color) -> MoveSet {
        let squares = (0..self.cells.len())
            .filter(|&i| self.cells[i].is_empty())
            .map(|i| Square::from_index(i, self.size))
            .filter(|&sq| self.flanks_any(sq, color))
            .collect();
        MoveSet::from_sorted(squares)
    }

    fn flanks_any(&self, square: Square, color: Color) -> bool {
        Direction::ALL
            .iter()
            .any(|&dir| self.flank_length(square, dir, color) > 0)
    }

    /// Number of opposing discs bracketed between `from` and the nearest
    /// `color` disc in `direction`; zero if the run hits an empty square or
    /// the edge first.
    fn flank_length(&self, from: Square, direction: Direction, color: Color) -> usize {
        let opponent = color.opponent().cell();
        let mut run = 0;
        for square in from.ray(direction, self.size) {
            match self.at(square) {
                Cell::Empty => return 0,
                cell if cell == opponent => run += 1,
                _ => return run,
            }
        }
        0
    }

    fn collect_flips(&self, square: Square, color: Color) -> Flips {
        let mut flips = Flips::new();
        for &dir in &Direction::ALL {
            let run = self.flank_length(square, dir, color);
            flips.extend(square.ray(dir, self.size).take(run));
        }
        flips
    }

    // === Mutation ===

    /// Place a disc of `color` at `(row, col)`, flip every bracketed run and
    /// hand the turn on.
    ///
    /// The turn goes to the opponent if it has a legal move, stays with
    /// `color` if only `color` can move (a pass), and otherwise the game
    /// ends with `current_player` left unchanged.
    ///
    /// On error nothing is modified.
    pub fn make_move(&mut self, row: usize, col: usize, color: Color) -> Result<MoveOutcome, MoveError> {
        if self.status.is_finished() {
            return Err(MoveError::GameOver);
        }
        if color != self.current_player {
            return Err(MoveError::OutOfTurn {
                expected: self.current_player,
                got: color,
            });
        }

        let square = Square::new(row, col);
        if !square.in_bounds(self.size) {
            return Err(MoveError::OutOfBounds {
                square,
                size: self.size,
            });
        }
        if !self.at(square).is_empty() {
            return Err(MoveError::Occupied { square });
        }

        let flipped = self.collect_flips(square, color);
        if flipped.is_empty() {
            return Err(MoveError::NoFlank {
                square,
                opponent: color.opponent(),
            });
        }

        let disc = color.cell();
        self.cells[square.index(self.size)] = disc;
        for sq in &flipped {
            self.cells[sq.index(self.size)] = disc;
        }
        trace!("{} plays {} flipping {}", color, square, flipped.len());

        let next = self.transfer_turn(color);
        Ok(MoveOutcome {
            color,
            square,
            flipped,
            next,
        })
    }

    /// Play a square for the side to move.
    pub fn play(&mut self, square: Square) -> Result<MoveOutcome, MoveError> {
        self.make_move(square.row, square.col, self.current_player)
    }

    fn transfer_turn(&mut self, mover: Color) -> NextTurn {
        let opponent = mover.opponent();
        let opponent_moves = self.compute_moves(opponent);
        if !opponent_moves.is_empty() {
            self.current_player = opponent;
            self.legal_moves = opponent_moves;
            self.status = GameStatus::InProgress(opponent);
            return NextTurn::Opponent(opponent);
        }

        let own_moves = self.compute_moves(mover);
        if !own_moves.is_empty() {
            debug!("{} has no legal move and passes", opponent);
            self.legal_moves = own_moves;
            self.status = GameStatus::InProgress(mover);
            return NextTurn::Pass(mover);
        }

        let winner = self.winner();
        debug!("game over: {} ({})", winner, self.score());
        self.legal_moves = MoveSet::default();
        self.status = GameStatus::Finished(winner);
        NextTurn::GameOver(winner)
    }

    // === Termination and scoring ===

    /// True iff neither side has a legal move, full board or not.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_finished()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for cell in &self.cells {
            match cell {
                Cell::Black => score.black += 1,
                Cell::White => score.white += 1,
                Cell::Empty => {}
            }
        }
        score
    }

    /// The side currently ahead on discs, or `Tie`. Final once
    /// [`Board::is_game_over`] holds.
    #[must_use]
    pub fn winner(&self) -> Winner {
        self.score().winner()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    // === Snapshots ===

    /// An independent copy for speculative play.
    ///
    /// ```
    /// use rust_othello::{Board, Color};
    ///
    /// let board = Board::new(8).unwrap();
    /// let mut sim = board.copy();
    /// sim.make_move(2, 3, Color::Black).unwrap();
    /// assert_eq!(board.score().black, 2);
    /// assert_eq!(sim.score().black, 4);
    /// ```
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl Default for Board {
    /// The standard 8x8 opening.
    fn default() -> Self {
        let size = BoardConfig::default().size;
        Self::settled(size, Self::opening_cells(size), Color::Black)
    }
}
