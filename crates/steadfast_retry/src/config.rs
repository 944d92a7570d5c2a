//! Configuration loading.
//!
//! This module provides TOML-based configuration for retry and probe
//! behavior. The configuration system supports:
//! - Bundled defaults (include_str! from steadfast.toml)
//! - User overrides (./steadfast.toml or ~/.config/steadfast/steadfast.toml)
//! - Automatic merging with user values taking precedence

use crate::RetryConfig;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use steadfast_core::{AuthType, BackoffSettings, ProbeSettings};
use steadfast_error::{ConfigError, HttpStatus, SteadfastError, SteadfastResult};
use tracing::{debug, instrument};

/// Top-level Steadfast configuration.
///
/// Loads configuration from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from steadfast.toml)
/// 2. User override (~/.config/steadfast/steadfast.toml, then ./steadfast.toml)
///
/// # Example
///
/// ```toml
/// auth_type = "oauth-personal"
///
/// [retry]
/// max_attempts = 3
/// initial_delay_ms = 1_000
///
/// [probe]
/// timeout_ms = 1_500
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct SteadfastConfig {
    /// How the session is authenticated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<AuthType>,

    /// Retry budget and delay bounds
    #[serde(default)]
    pub retry: BackoffSettings,

    /// Effective-model probe settings
    #[serde(default)]
    pub probe: ProbeSettings,
}

impl SteadfastConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// retry settings are invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SteadfastResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                SteadfastError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SteadfastError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (steadfast.toml shipped with the library)
    /// 2. User config in home directory (~/.config/steadfast/steadfast.toml)
    /// 3. User config in current directory (./steadfast.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> SteadfastResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../steadfast.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/steadfast/steadfast.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("steadfast").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                SteadfastError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SteadfastError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check the retry invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero or the initial delay
    /// exceeds the maximum delay.
    pub fn validate(&self) -> SteadfastResult<()> {
        self.retry.validate()?;
        Ok(())
    }

    /// Build a retry configuration carrying these settings and auth mode.
    ///
    /// Attach a fallback handler or cancellation token with the
    /// `RetryConfig::with_*` methods.
    pub fn retry_config<E: HttpStatus + 'static>(&self) -> RetryConfig<E> {
        let config = RetryConfig::new(self.retry.clone());
        match self.auth_type {
            Some(auth_type) => config.with_auth_type(auth_type),
            None => config,
        }
    }
}
