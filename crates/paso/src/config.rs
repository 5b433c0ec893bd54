//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use paso_bingo::{AcronymDictionary, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "PASO_CONFIG";

/// Configuration for the P.A.S.O. command-line app.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct PasoConfig {
    /// Path of the JSON state file.
    #[serde(default = "default_state_path")]
    state_path: PathBuf,

    /// Theme used when `bingo new` is given none.
    #[serde(default)]
    default_theme: Theme,

    /// Acronym expansions. Falls back to the built-in list.
    #[serde(default)]
    acronyms: AcronymDictionary,

    /// Name shown once the campaign reaches the reveal phase.
    #[serde(default = "default_union_name")]
    union_name: String,

    /// Name shown before the reveal phase.
    #[serde(default = "default_neutral_name")]
    neutral_name: String,
}

#[instrument]
fn default_state_path() -> PathBuf {
    PathBuf::from("paso_state.json")
}

#[instrument]
fn default_union_name() -> String {
    "Sindicato de Trabajadores".to_string()
}

#[instrument]
fn default_neutral_name() -> String {
    "P.A.S.O.".to_string()
}

impl Default for PasoConfig {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            default_theme: Theme::default(),
            acronyms: AcronymDictionary::builtin(),
            union_name: default_union_name(),
            neutral_name: default_neutral_name(),
        }
    }
}

impl PasoConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(state_path = %config.state_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves configuration: explicit path, then `$PASO_CONFIG`, then
    /// defaults.
    #[instrument]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the state file path.
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = path.into();
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
