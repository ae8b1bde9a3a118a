//! Game configuration loaded from TOML.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use wordscramble_core::DEFAULT_LANGUAGE;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "wordscramble.toml";

/// Runtime configuration for the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Newline-separated root word list. Uses the bundled list when unset.
    #[serde(default)]
    word_list: Option<PathBuf>,

    /// Newline-separated dictionary file. Uses the bundled list when unset.
    #[serde(default)]
    dictionary: Option<PathBuf>,

    /// Language tag passed to the dictionary.
    #[serde(default = "default_language")]
    language: String,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("wordscramble.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            dictionary: None,
            language: default_language(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(language = %config.language, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for this run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// used if present, otherwise defaults apply.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }
}

wordscramble_core::location_error! {
    /// Configuration error.
    pub struct ConfigError("Config error");
}
