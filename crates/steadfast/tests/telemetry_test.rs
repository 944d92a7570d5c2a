//! Tests for logging setup.

use steadfast::{LoggingConfig, init_logging};

#[test]
fn test_logging_config_defaults() {
    let config = LoggingConfig::default();
    assert_eq!(config.log_level, "info");
    assert!(!config.json_logs);
}

#[test]
fn test_logging_config_verbosity() {
    assert_eq!(LoggingConfig::from_verbosity(true).log_level, "debug");
    assert_eq!(LoggingConfig::from_verbosity(false).log_level, "info");

    let config = LoggingConfig::from_verbosity(false).with_json_logs(true);
    assert!(config.json_logs);
}

#[test]
fn test_init_logging_only_once() {
    let config = LoggingConfig::new("steadfast=debug").with_json_logs(true);

    init_logging(&config).expect("First initialization should succeed");
    assert!(
        init_logging(&config).is_err(),
        "A second global subscriber must be rejected"
    );
}
