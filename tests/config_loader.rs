use randoo::config::{Config, ConfigError, LoggingConfig, RelayConfig};
use std::io::Write;
use std::path::PathBuf;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.relay.queue_capacity, 512);
    assert!(config.logging.log_file.is_none());
    assert!(config.logging.log_filter.is_none());
}

/// Missing file means defaults, not an error.
#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.relay.queue_capacity, 512);
}

#[test]
fn test_full_file_parses() {
    let file = write_config(
        r#"
[relay]
queue_capacity = 64

[logging]
log_file = "/tmp/randoo.log"
log_filter = "debug"
"#,
    );
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.relay.queue_capacity, 64);
    assert_eq!(config.logging.log_file, Some(PathBuf::from("/tmp/randoo.log")));
    assert_eq!(config.logging.log_filter.as_deref(), Some("debug"));
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_config("[logging]\nlog_filter = \"trace\"\n");
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.relay.queue_capacity, 512);
    assert_eq!(config.logging.log_filter.as_deref(), Some("trace"));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_config("[relay\nqueue_capacity = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_capacity_fails_validation() {
    let config = Config {
        relay: RelayConfig { queue_capacity: 0 },
        logging: LoggingConfig::default(),
    };

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("queue_capacity"));
        }
        _ => panic!("Expected ValidationError"),
    }
}

#[test]
fn test_config_path_ends_with_expected() {
    if std::env::var_os(randoo::config::CONFIG_ENV_VAR).is_some() {
        return;
    }
    let path = Config::config_path();
    assert!(path.ends_with("randoo/config.toml"));
}
