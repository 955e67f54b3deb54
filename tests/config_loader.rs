mod common;

use rerender_lab::config::{Config, ConfigError};
use std::path::Path;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.log_panel_lines, 200);
    assert_eq!(config.slider.initial_level, 300);
    assert_eq!(config.slider.step, 10);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("rerender-lab/config.toml"));
    assert!(Config::default_log_path().ends_with("rerender-lab/rerender-lab.log"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/definitely/not/here/config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_toml_fills_defaults() {
    let (_dir, path) = common::temp_config(
        r#"
[slider]
initial_level = 120

[logging]
level = "debug"
file = "/tmp/rerender-lab-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.slider.initial_level, 120);
    assert_eq!(config.slider.step, 10);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(Path::new("/tmp/rerender-lab-test.log"))
    );
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = common::temp_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = common::temp_config("[slider\ninitial_level = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = common::temp_config("[ui]\ntick_rate_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

fn validation_message(contents: &str) -> String {
    let (_dir, path) = common::temp_config(contents);
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => message,
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_level_off_the_slider() {
    let message = validation_message("[slider]\ninitial_level = 501\n");
    assert!(message.contains("slider.initial_level 501"));
    let message = validation_message("[slider]\ninitial_level = -1\n");
    assert!(message.contains("outside 0..=500"));
}

#[test]
fn test_validation_rejects_bad_step() {
    assert!(validation_message("[slider]\nstep = 0\n").contains("slider.step 0"));
    assert!(validation_message("[slider]\nstep = 501\n").contains("between 1 and 500"));
}

#[test]
fn test_validation_rejects_zero_tick_and_panel() {
    assert!(validation_message("[ui]\ntick_rate_ms = 0\n").contains("tick_rate_ms"));
    assert!(validation_message("[ui]\nlog_panel_lines = 0\n").contains("log_panel_lines"));
}

#[test]
fn test_validation_rejects_bad_log_filter() {
    let message = validation_message("[logging]\nlevel = \"render=shouting\"\n");
    assert!(message.contains("logging.level 'render=shouting'"));
}

#[test]
fn test_error_display_names_the_file() {
    let (_dir, path) = common::temp_config("not toml at all = = =");
    let err = Config::load_from(&path).unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("Failed to parse config file"));
    assert!(text.contains("config.toml"));
}
