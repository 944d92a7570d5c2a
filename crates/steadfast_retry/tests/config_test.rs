//! Tests for configuration loading.

use std::io::Write;
use steadfast_core::{AuthType, BackoffSettings};
use steadfast_error::GeminiError;
use steadfast_retry::{RetryConfig, SteadfastConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_bundled_defaults() {
    let config = SteadfastConfig::load().expect("Failed to load bundled config");

    // Values below are only guaranteed for the bundled file; a user override
    // may change them, so check invariants instead of exact numbers.
    assert!(*config.retry.max_attempts() >= 1);
    assert!(config.retry.initial_delay() <= config.retry.max_delay());
    assert!(!config.probe.default_model().is_empty());
    assert!(!config.probe.fallback_model().is_empty());
}

#[test]
fn test_from_file_full() -> anyhow::Result<()> {
    let file = write_config(
        r#"
auth_type = "oauth-personal"

[retry]
max_attempts = 3
initial_delay_ms = 250
max_delay_ms = 2_000

[probe]
endpoint = "http://127.0.0.1:9999/v1beta"
timeout_ms = 500
default_model = "gemini-2.5-pro"
fallback_model = "gemini-2.5-flash"
"#,
    );

    let config = SteadfastConfig::from_file(file.path())?;

    assert_eq!(config.auth_type, Some(AuthType::LoginWithGoogle));
    assert_eq!(*config.retry.max_attempts(), 3);
    assert_eq!(*config.retry.initial_delay_ms(), 250);
    assert_eq!(*config.retry.max_delay_ms(), 2_000);
    assert_eq!(config.probe.endpoint(), "http://127.0.0.1:9999/v1beta");
    assert_eq!(*config.probe.timeout_ms(), 500);
    Ok(())
}

#[test]
fn test_from_file_partial_uses_defaults() -> anyhow::Result<()> {
    let file = write_config(
        r#"
[retry]
max_attempts = 2
"#,
    );

    let config = SteadfastConfig::from_file(file.path())?;

    assert_eq!(config.auth_type, None);
    assert_eq!(*config.retry.max_attempts(), 2);
    assert_eq!(*config.retry.initial_delay_ms(), 5_000);
    assert_eq!(*config.retry.max_delay_ms(), 30_000);
    assert_eq!(config.probe, Default::default());
    Ok(())
}

#[test]
fn test_from_file_rejects_zero_attempts() {
    let file = write_config(
        r#"
[retry]
max_attempts = 0
"#,
    );

    let err = SteadfastConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("max_attempts"));
}

#[test]
fn test_from_file_rejects_inverted_delays() {
    let file = write_config(
        r#"
[retry]
initial_delay_ms = 10_000
max_delay_ms = 1_000
"#,
    );

    assert!(SteadfastConfig::from_file(file.path()).is_err());
}

#[test]
fn test_from_file_rejects_unknown_auth_type() {
    let file = write_config(r#"auth_type = "password""#);

    let err = SteadfastConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse configuration"));
}

#[test]
fn test_from_file_missing_file() {
    let err = SteadfastConfig::from_file("/nonexistent/steadfast.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read configuration"));
}

#[test]
fn test_retry_config_carries_auth_and_settings() {
    let config = SteadfastConfig {
        auth_type: Some(AuthType::UseVertexAi),
        retry: BackoffSettings::builder().max_attempts(7).build(),
        ..Default::default()
    };

    let retry: RetryConfig<GeminiError> = config.retry_config();

    assert_eq!(retry.auth_type(), Some(AuthType::UseVertexAi));
    assert_eq!(*retry.settings().max_attempts(), 7);
}
