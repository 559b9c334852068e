//! Board configuration.
//!
//! The only structural choice a game makes is the edge length of the board.
//! Everything else (opening layout, first player) is fixed by the rules.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest supported edge length.
pub const MIN_SIZE: usize = 4;

/// Standard tournament edge length.
pub const STANDARD_SIZE: usize = 8;

/// Board configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Edge length. Must be even and at least [`MIN_SIZE`].
    pub size: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: STANDARD_SIZE,
        }
    }
}

impl BoardConfig {
    /// Create a validated configuration.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        let config = Self { size };
        config.validate()?;
        Ok(config)
    }

    /// Set the edge length.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Check the invariants a board relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_SIZE || self.size % 2 != 0 {
            return Err(ConfigError::InvalidSize { size: self.size });
        }
        Ok(())
    }

    /// Number of squares on the board.
    #[must_use]
    pub fn num_squares(&self) -> usize {
        self.size * self.size
    }
}
