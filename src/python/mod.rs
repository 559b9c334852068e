//! Python bindings for the Othello engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_othello as othello
//!
//! board = othello.Board(8)
//! board.get_valid_moves("black")   # [(2, 3), (3, 2), (4, 5), (5, 4)]
//! board.make_move(2, 3, "black")   # True
//! board.get_score()                # (4, 1)
//!
//! sim = board.copy()               # independent copy for search
//! ```

use pyo3::prelude::*;

mod py_board;

pub use py_board::*;

/// rust_othello: an Othello rule engine for variable board sizes.
#[pymodule]
fn rust_othello(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    Ok(())
}
