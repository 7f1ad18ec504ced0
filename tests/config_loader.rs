mod common;

use std::path::Path;

use common::temp_config;
use echoform::config::{Config, ConfigError};

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.echo.debounce_ms, 300);
    assert_eq!(config.echo.prefix, "You typed: ");
    assert_eq!(config.registration.min_password_len, 8);
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("echoform/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/echoform/config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[echo]
prefix = "Você digitou: "
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.echo.prefix, "Você digitou: ");
    assert_eq!(config.echo.debounce_ms, 300);
    assert_eq!(config.registration.min_password_len, 8);
}

#[test]
fn test_full_file() {
    let (_dir, path) = temp_config(
        r#"
[echo]
debounce_ms = 150
prefix = "> "

[registration]
min_password_len = 12
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.echo.debounce_ms, 150);
    assert_eq!(config.echo.prefix, "> ");
    assert_eq!(config.registration.min_password_len, 12);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("invalid { toml }");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_zero_debounce_fails_validation() {
    let (_dir, path) = temp_config("[echo]\ndebounce_ms = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("debounce_ms"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_zero_password_len_fails_validation() {
    let mut config = Config::default();
    config.registration.min_password_len = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_unreadable_path_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    // A directory exists but cannot be read as a file.
    match Config::load_from(dir.path()) {
        Err(ConfigError::ReadError { .. }) => {}
        other => panic!("Expected ReadError, got {other:?}"),
    }
}
