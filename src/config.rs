//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who takes the first move (and therefore plays X).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    /// The person at the keyboard.
    Human,
    /// The greedy opponent.
    Computer,
}

/// Settings for interactive play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Name shown for the human player.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name shown for the computer player.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Who moves first. When unset, the player is asked each game.
    #[serde(default)]
    first: Option<FirstMover>,

    /// Print which heuristic rule chose each computer move.
    #[serde(default)]
    show_strategy: bool,
}

#[instrument]
fn default_human_name() -> String {
    "You".to_string()
}

#[instrument]
fn default_computer_name() -> String {
    "Computer".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_name: default_human_name(),
            computer_name: default_computer_name(),
            first: None,
            show_strategy: false,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or
    /// parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first = ?config.first, show_strategy = config.show_strategy, "Config loaded");
        Ok(config)
    }

    /// Overrides who moves first.
    pub fn with_first(mut self, first: Option<FirstMover>) -> Self {
        if first.is_some() {
            self.first = first;
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
