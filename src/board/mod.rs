//! The board engine.
//!
//! - `engine`: `Board` state, legal moves, move application, turn transfer
//! - `moves`: `MoveSet` and `MoveOutcome`
//! - `diagram`: text rendering and parsing of positions

mod diagram;
pub mod engine;
pub mod moves;

pub use engine::Board;
pub use moves::{Flips, MoveOutcome, MoveSet};
