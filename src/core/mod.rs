//! Core value types: colors, squares, configuration, errors, RNG.
//!
//! Everything here is small and `Copy` where possible; the board engine
//! and its collaborators are built from these pieces.

pub mod color;
pub mod square;
pub mod config;
pub mod error;
pub mod rng;

pub use color::{Cell, Color};
pub use square::{Direction, Square};
pub use config::{BoardConfig, MIN_SIZE, STANDARD_SIZE};
pub use error::{ConfigError, MoveError, ParseError};
pub use rng::{GameRng, GameRngState};
