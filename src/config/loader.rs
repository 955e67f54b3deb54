use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::types::Config;
use crate::demo::satisfaction::{MAX_LEVEL, MIN_LEVEL};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Directory holding the config file and the default log file.
    ///
    /// `~/.config/rerender-lab` on Unix/macOS, the platform equivalent
    /// elsewhere, or the current directory if none is available.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rerender-lab")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Log file used by the interactive demos when none is configured.
    pub fn default_log_path() -> PathBuf {
        Self::config_dir().join("rerender-lab.log")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - tick rate and log panel size are non-zero
    /// - the initial level lies on the slider
    /// - the step is between 1 and the slider width
    /// - the log level is a valid filter directive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms must be greater than 0"));
        }
        if self.ui.log_panel_lines == 0 {
            return Err(invalid("ui.log_panel_lines must be greater than 0"));
        }

        let level = self.slider.initial_level;
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(invalid(format!(
                "slider.initial_level {} is outside {}..={}",
                level, MIN_LEVEL, MAX_LEVEL
            )));
        }

        let step = self.slider.step;
        if !(1..=MAX_LEVEL).contains(&step) {
            return Err(invalid(format!(
                "slider.step {} must be between 1 and {}",
                step, MAX_LEVEL
            )));
        }

        if let Err(err) = EnvFilter::try_new(&self.logging.level) {
            return Err(invalid(format!(
                "logging.level '{}' is not a valid filter: {}",
                self.logging.level, err
            )));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
