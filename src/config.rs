//! Game configuration
//!
//! Word length and round limit, supplied from the command line.

use thiserror::Error;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of guesses before the game is lost
pub const DEFAULT_MAX_ROUNDS: usize = 8;

/// Invalid configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be at least 1")]
    ZeroWordLength,
    #[error("round limit must be at least 1")]
    ZeroRounds,
    #[error("secret word '{word}' has {actual} letters, expected {expected}")]
    SecretLength {
        word: String,
        expected: usize,
        actual: usize,
    },
}

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_rounds: usize,
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if either value is zero.
    pub fn new(word_length: usize, max_rounds: usize) -> Result<Self, ConfigError> {
        let config = Self {
            word_length,
            max_rounds,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `ConfigError` if either value is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_rounds, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_values_rejected() {
        assert_eq!(GameConfig::new(0, 6), Err(ConfigError::ZeroWordLength));
        assert_eq!(GameConfig::new(5, 0), Err(ConfigError::ZeroRounds));
    }

    #[test]
    fn custom_values_accepted() {
        let config = GameConfig::new(6, 10).unwrap();
        assert_eq!(config.word_length, 6);
        assert_eq!(config.max_rounds, 10);
    }
}
