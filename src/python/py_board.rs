//! Board bindings for Python.
//!
//! Mirrors the method names a Python front end already expects
//! (`get_valid_moves`, `make_move`, `get_score`, ...). Colors cross the
//! boundary as the strings `"black"` and `"white"`.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::Board;
use crate::core::{Cell, Color};
use crate::rules::Winner;

fn parse_color(color: &str) -> PyResult<Color> {
    match color.to_ascii_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "white" => Ok(Color::White),
        other => Err(PyValueError::new_err(format!(
            "color must be 'black' or 'white', got {:?}",
            other
        ))),
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::White => "white",
    }
}

/// Negative coordinates are simply off the board.
fn coords(row: i64, col: i64) -> Option<(usize, usize)> {
    Some((usize::try_from(row).ok()?, usize::try_from(col).ok()?))
}

/// Python wrapper for Board.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    /// Create a board in the standard opening.
    ///
    /// Raises ValueError for odd sizes or sizes below 4.
    #[new]
    #[pyo3(signature = (size = 8))]
    fn new(size: usize) -> PyResult<Self> {
        Board::new(size)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn size(&self) -> usize {
        self.0.size()
    }

    /// "black" or "white".
    #[getter]
    fn current_player(&self) -> &'static str {
        color_name(self.0.current_player())
    }

    /// Legal moves for `color` as (row, col) tuples, row-major.
    fn get_valid_moves(&self, color: &str) -> PyResult<Vec<(usize, usize)>> {
        Ok(self.0.valid_moves(parse_color(color)?).to_pairs())
    }

    fn is_valid_move(&self, row: i64, col: i64, color: &str) -> PyResult<bool> {
        let color = parse_color(color)?;
        Ok(coords(row, col).is_some_and(|(r, c)| self.0.is_valid_move(r, c, color)))
    }

    /// Apply a move. Returns False (and changes nothing) if it is rejected.
    fn make_move(&mut self, row: i64, col: i64, color: &str) -> PyResult<bool> {
        let color = parse_color(color)?;
        let Some((r, c)) = coords(row, col) else {
            return Ok(false);
        };
        Ok(self.0.make_move(r, c, color).is_ok())
    }

    /// (black_count, white_count)
    fn get_score(&self) -> (usize, usize) {
        self.0.score().into()
    }

    /// "black", "white" or "tie".
    fn get_winner(&self) -> &'static str {
        match self.0.winner() {
            Winner::Black => "black",
            Winner::White => "white",
            Winner::Tie => "tie",
        }
    }

    fn is_game_over(&self) -> bool {
        self.0.is_game_over()
    }

    /// Independent copy for simulations.
    fn copy(&self) -> Self {
        Self(self.0.copy())
    }

    /// "black", "white", or None for empty and off-board squares.
    fn get_cell(&self, row: i64, col: i64) -> Option<&'static str> {
        let (r, c) = coords(row, col)?;
        self.0.cell(r, c)?.color().map(color_name)
    }

    /// The grid as an int8 array: 1 black, -1 white, 0 empty.
    fn grid<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let size = self.0.size();
        let values: Vec<i8> = self
            .0
            .cells()
            .iter()
            .map(|cell| match cell {
                Cell::Black => 1,
                Cell::White => -1,
                Cell::Empty => 0,
            })
            .collect();
        PyArray1::from_vec_bound(py, values).reshape([size, size])
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        let score = self.0.score();
        format!(
            "Board(size={}, to_move={}, black={}, white={}, over={})",
            self.0.size(),
            self.current_player(),
            score.black,
            score.white,
            self.0.is_game_over()
        )
    }
}
