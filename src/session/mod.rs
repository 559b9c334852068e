//! Running games between policies.
//!
//! A [`Match`] is the thinnest possible game loop: it owns the authoritative
//! board, asks the policy for the side to move, validates the answer and
//! logs what happened. UIs and self-play harnesses build on it.

pub mod config;
pub mod record;
pub mod runner;

pub use config::MatchConfig;
pub use record::{Action, MoveRecord};
pub use runner::{Match, MatchError, MatchResult};
