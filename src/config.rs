//! Tournament configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for one tournament run.
///
/// Loaded from a TOML file with per-field defaults; every duration must be
/// positive.
#[derive(Debug, Clone, Getters, Serialize, Deserialize, derive_new::new)]
pub struct TournamentConfig {
    /// Board width in cells.
    #[serde(default = "default_board_width")]
    board_width: u32,

    /// Board height in cells.
    #[serde(default = "default_board_height")]
    board_height: u32,

    /// Pause between consecutive rounds, in seconds.
    #[serde(default = "default_round_length_secs")]
    round_length_secs: u64,

    /// Total tournament length, in seconds. The sole stop condition.
    #[serde(default = "default_tournament_length_secs")]
    tournament_length_secs: u64,

    /// Per-request timeout when querying a player agent, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,
}

fn default_board_width() -> u32 {
    15
}

fn default_board_height() -> u32 {
    15
}

fn default_round_length_secs() -> u64 {
    60
}

fn default_tournament_length_secs() -> u64 {
    600
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            board_width: default_board_width(),
            board_height: default_board_height(),
            round_length_secs: default_round_length_secs(),
            tournament_length_secs: default_tournament_length_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl TournamentConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")))?;

        info!(
            board_width = config.board_width,
            board_height = config.board_height,
            round_length_secs = config.round_length_secs,
            tournament_length_secs = config.tournament_length_secs,
            "Config loaded"
        );
        Ok(config)
    }

    /// Overrides the round length.
    pub fn set_round_length_secs(&mut self, secs: u64) {
        self.round_length_secs = secs;
    }

    /// Overrides the total tournament length.
    pub fn set_tournament_length_secs(&mut self, secs: u64) {
        self.tournament_length_secs = secs;
    }

    /// Validates that every dimension and duration is positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("board_width", u64::from(self.board_width)),
            ("board_height", u64::from(self.board_height)),
            ("round_length_secs", self.round_length_secs),
            ("tournament_length_secs", self.tournament_length_secs),
            ("request_timeout_secs", self.request_timeout_secs),
        ];
        for (name, value) in positives {
            if value == 0 {
                return Err(ConfigError::new(format!("{name} must be positive")));
            }
        }
        Ok(())
    }

    /// Pause between rounds.
    pub fn round_length(&self) -> Duration {
        Duration::from_secs(self.round_length_secs)
    }

    /// Total tournament length.
    pub fn tournament_length(&self) -> Duration {
        Duration::from_secs(self.tournament_length_secs)
    }

    /// Per-request agent timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
