//! Driver configuration loaded from TOML.

use crate::mode::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_tictactoe::Mark;
use tracing::{debug, info, instrument};

/// Settings for a duel session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Starting mode.
    mode: Mode,

    /// Mark played from the keyboard in `pvai` mode.
    human_mark: Mark,

    /// Mark played by the heuristic opponent.
    opponent_mark: Mark,

    /// Pause before the opponent answers, in milliseconds.
    opponent_delay_ms: u64,

    /// Seed for the opponent's random picks. Unset means OS entropy.
    seed: Option<u64>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            mode: Mode::HumanVsHuman,
            human_mark: Mark::X,
            opponent_mark: Mark::O,
            opponent_delay_ms: 400,
            seed: None,
        }
    }
}

impl DuelConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, delay_ms = config.opponent_delay_ms, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<Mode>,
        delay_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(delay_ms) = delay_ms {
            self.opponent_delay_ms = delay_ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Opponent pacing delay.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.human_mark == self.opponent_mark {
            return Err(ConfigError::new(format!(
                "human_mark and opponent_mark must differ (both are {})",
                self.human_mark
            )));
        }
        Ok(())
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
    #[instrument(skip(message))]
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

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = DuelConfig::from_toml("").unwrap();
        assert_eq!(config, DuelConfig::default());
        assert_eq!(config.opponent_delay(), Duration::from_millis(400));
    }

    #[test]
    fn test_partial_toml() {
        let config = DuelConfig::from_toml("mode = \"pvai\"\nseed = 9\n").unwrap();
        assert_eq!(*config.mode(), Mode::HumanVsOpponent);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.human_mark(), Mark::X);
    }

    #[test]
    fn test_same_marks_rejected() {
        let err = DuelConfig::from_toml("human_mark = \"O\"\nopponent_mark = \"O\"\n").unwrap_err();
        assert!(err.message.contains("must differ"));
    }

    #[test]
    fn test_overrides() {
        let config =
            DuelConfig::default().with_overrides(Some(Mode::HumanVsOpponent), Some(0), None);
        assert_eq!(*config.mode(), Mode::HumanVsOpponent);
        assert_eq!(*config.opponent_delay_ms(), 0);
        assert_eq!(*config.seed(), None);
    }
}
