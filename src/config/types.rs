use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::demo::render_log::DEFAULT_CAPACITY;
use crate::demo::satisfaction::DEFAULT_LEVEL;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll / redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Render-log entries kept for the panel (default: 200).
    #[serde(default = "default_log_panel_lines")]
    pub log_panel_lines: usize,
}

/// Satisfaction slider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Starting level, 0..=500 (default: 300).
    #[serde(default = "default_initial_level")]
    pub initial_level: i64,
    /// Arrow-key step; PageUp/PageDown move ten steps (default: 10).
    #[serde(default = "default_step")]
    pub step: i64,
}

/// Diagnostics written through `tracing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive; `RUST_LOG` takes precedence (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for interactive modes. Defaults to a file next to the config.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_panel_lines() -> usize {
    DEFAULT_CAPACITY
}

fn default_initial_level() -> i64 {
    DEFAULT_LEVEL
}

fn default_step() -> i64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            log_panel_lines: default_log_panel_lines(),
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            initial_level: default_initial_level(),
            step: default_step(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
