//! Narration configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How a solution is narrated.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct NarrationConfig {
    /// Display names of the start, middle and end pegs.
    #[serde(default = "default_peg_names")]
    peg_names: [String; 3],

    /// Print every move.
    #[serde(default = "default_true")]
    show_moves: bool,

    /// Print the contents of each peg once solved.
    #[serde(default = "default_true")]
    show_final_pegs: bool,
}

fn default_peg_names() -> [String; 3] {
    ["A".to_string(), "B".to_string(), "C".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            peg_names: default_peg_names(),
            show_moves: true,
            show_final_pegs: true,
        }
    }
}

impl NarrationConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(peg_names = ?config.peg_names, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that every peg name is non-empty and distinct.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(idx) = self.peg_names.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::new(format!("Peg name {} is empty", idx + 1)));
        }
        let [a, b, c] = &self.peg_names;
        if a == b || a == c || b == c {
            return Err(ConfigError::new(format!(
                "Peg names must be distinct, got {:?}",
                self.peg_names
            )));
        }
        Ok(())
    }

    /// Returns this config with per-move output switched on or off.
    pub fn with_show_moves(mut self, show_moves: bool) -> Self {
        self.show_moves = show_moves;
        self
    }

    /// Returns this config with the final peg listing switched on or off.
    pub fn with_show_final_pegs(mut self, show_final_pegs: bool) -> Self {
        self.show_final_pegs = show_final_pegs;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = NarrationConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, NarrationConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = NarrationConfig::from_toml("show_moves = false").expect("parses");
        assert!(!config.show_moves());
        assert!(*config.show_final_pegs());
        assert_eq!(config.peg_names()[2], "C");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = NarrationConfig::from_toml(r#"peg_names = ["L", "L", "R"]"#)
            .expect_err("duplicates");
        assert!(err.message.contains("distinct"));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(NarrationConfig::from_toml(r#"peg_names = ["L", " ", "R"]"#).is_err());
    }

    #[test]
    fn test_wrong_name_count_rejected() {
        assert!(NarrationConfig::from_toml(r#"peg_names = ["L", "R"]"#).is_err());
    }
}
