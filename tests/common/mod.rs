//! Shared test utilities.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `contents` to a config.toml inside a fresh temp dir.
/// Keep the `TempDir` alive for as long as the path is used.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}
