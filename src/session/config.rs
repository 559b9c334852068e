//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, ConfigError};

/// Match configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board to play on.
    pub board: BoardConfig,

    /// Stop after this many placements (0 = play to the end).
    /// A game on an N×N board never needs more than N² - 4.
    pub max_plies: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            max_plies: 0,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board edge length.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board = self.board.with_size(size);
        self
    }

    /// Set the placement limit.
    pub fn with_max_plies(mut self, max: usize) -> Self {
        self.max_plies = max;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()
    }

    /// Whether `plies` placements exhaust the limit.
    #[must_use]
    pub fn limit_reached(&self, plies: usize) -> bool {
        self.max_plies > 0 && plies >= self.max_plies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.board.size, 8);
        assert_eq!(config.max_plies, 0);
        assert!(!config.limit_reached(10_000));
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new().with_board_size(6).with_max_plies(10);
        assert_eq!(config.board.size, 6);
        assert!(config.validate().is_ok());
        assert!(!config.limit_reached(9));
        assert!(config.limit_reached(10));
    }

    #[test]
    fn test_invalid_board() {
        let config = MatchConfig::new().with_board_size(9);
        assert_eq!(config.validate(), Err(ConfigError::InvalidSize { size: 9 }));
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::new().with_board_size(4).with_max_plies(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
