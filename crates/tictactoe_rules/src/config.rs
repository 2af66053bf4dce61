//! Rules configuration.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// What happens when a non-winning move fills the last empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawPolicy {
    /// The game finishes with no winner.
    #[default]
    Finalize,
    /// The game stays in progress; further moves are all rejected as occupied.
    Continue,
}

/// Configuration for a [`Board`](crate::Board).
///
/// ```toml
/// draw_policy = "continue"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Draw handling.
    #[serde(default)]
    draw_policy: DrawPolicy,
}

impl RulesConfig {
    /// Creates a configuration with the given draw policy.
    pub fn new(draw_policy: DrawPolicy) -> Self {
        Self { draw_policy }
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(draw_policy = ?config.draw_policy, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(draw_policy = ?config.draw_policy, "Config loaded successfully");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_defaults_to_finalize() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(config.draw_policy(), &DrawPolicy::Finalize);
    }

    #[test]
    fn test_continue_policy_parses() {
        let config = RulesConfig::from_toml_str(r#"draw_policy = "continue""#).unwrap();
        assert_eq!(config.draw_policy(), &DrawPolicy::Continue);
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        let err = RulesConfig::from_toml_str(r#"draw_policy = "sudden_death""#).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
