//! Tests for loading the TOML configuration.

use rewind_tui::TuiConfig;
use std::io::Write;
use std::path::PathBuf;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
log_file = "/tmp/rewind-test.log"
log_filter = "rewind_tui=debug"
tick_ms = 50
"#,
    );

    let config = TuiConfig::from_file(file.path()).expect("valid config");

    assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind-test.log"));
    assert_eq!(config.log_filter(), "rewind_tui=debug");
    assert_eq!(config.tick().as_millis(), 50);
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = write_config("tick_ms = 250\n");

    let config = TuiConfig::from_file(file.path()).expect("valid config");

    assert_eq!(*config.tick_ms(), 250);
    assert_eq!(config.log_filter(), TuiConfig::default().log_filter());
}

#[test]
fn test_unknown_key_rejected() {
    let file = write_config("board_size = 4\n");

    let err = TuiConfig::from_file(file.path()).expect_err("unknown keys are errors");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_tick_rejected() {
    let file = write_config("tick_ms = 0\n");

    let err = TuiConfig::from_file(file.path()).expect_err("zero tick is invalid");
    assert!(err.message.contains("tick_ms"));
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");

    let err = TuiConfig::load(Some(missing.as_path())).expect_err("explicit path must exist");
    assert!(err.message.contains("Failed to read config file"));
}
