//! Player configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use versus_tictactoe::{Difficulty, Player};

/// Settings for an interactive session.
///
/// Every field is optional in the file:
///
/// ```toml
/// difficulty = "hard"
/// human_mark = "O"
/// seed = 42
/// ```
#[derive(Debug, Clone, Getters, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersusConfig {
    /// Engine strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// The mark the person at the keyboard plays.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Fixed seed for reproducible sessions.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_human_mark() -> Player {
    Player::X
}

impl Default for VersusConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            human_mark: default_human_mark(),
            seed: None,
        }
    }
}

impl VersusConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            difficulty = %config.difficulty,
            human_mark = %config.human_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        difficulty: Option<Difficulty>,
        human_mark: Option<Player>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(human_mark) = human_mark {
            self.human_mark = human_mark;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = VersusConfig::from_toml("").unwrap();
        assert_eq!(config, VersusConfig::default());
        assert_eq!(*config.difficulty(), Difficulty::Normal);
        assert_eq!(*config.human_mark(), Player::X);
    }

    #[test]
    fn test_full_file() {
        let content = "difficulty = \"hard\"\nhuman_mark = \"O\"\nseed = 9\n";
        let config = VersusConfig::from_toml(content).unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(*config.human_mark(), Player::O);
        assert_eq!(*config.seed(), Some(9));
    }

    #[test]
    fn test_unknown_difficulty_is_an_error() {
        let err = VersusConfig::from_toml("difficulty = \"nightmare\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides_win() {
        let config = VersusConfig::default().with_overrides(Some(Difficulty::Easy), None, Some(3));
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert_eq!(*config.human_mark(), Player::X);
        assert_eq!(*config.seed(), Some(3));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "difficulty = \"easy\"").unwrap();
        let config = VersusConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Easy);

        let missing = VersusConfig::from_file(file.path().with_extension("missing"));
        assert!(missing.is_err());
    }
}
