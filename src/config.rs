//! Rules configuration.
//!
//! Configuration is plain JSON; every field is optional and falls back to
//! the standard rules:
//!
//! ```json
//! { "max_health": 100, "dead_snake_behavior": "disappear" }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::{DeadSnakeBehavior, MAX_HEALTH};

/// Rules applied by every tick of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Health restored when a snake eats.
    pub max_health: u32,
    /// Whether dead snakes remain obstacles.
    pub dead_snake_behavior: DeadSnakeBehavior,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_health: MAX_HEALTH,
            dead_snake_behavior: DeadSnakeBehavior::Disappear,
        }
    }
}

/// Error type for loading rules configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(std::io::Error),
    /// The configuration is not valid JSON for [`RulesConfig`].
    Parse(serde_json::Error),
    /// The configuration parsed but a value is out of range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read rules config: {e}"),
            Self::Parse(e) => write!(f, "failed to parse rules config: {e}"),
            Self::Invalid(msg) => write!(f, "invalid rules config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl RulesConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `max_health` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health == 0 {
            return Err(ConfigError::Invalid(
                "max_health must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
