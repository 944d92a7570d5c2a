//! Backoff settings for the retry executor.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use steadfast_error::ConfigError;

/// Numeric retry budget and delay bounds.
///
/// This is the serde-loadable half of a retry configuration. The classifier,
/// auth mode and fallback handler are attached at runtime by the executor.
///
/// Invariants: `max_attempts >= 1` and `initial_delay_ms <= max_delay_ms`.
///
/// # Examples
///
/// ```
/// use steadfast_core::BackoffSettings;
/// use std::time::Duration;
///
/// let settings = BackoffSettings::builder()
///     .max_attempts(3)
///     .initial_delay_ms(100)
///     .build();
///
/// assert_eq!(*settings.max_attempts(), 3);
/// assert_eq!(settings.initial_delay(), Duration::from_millis(100));
/// assert_eq!(settings.max_delay(), Duration::from_secs(30)); // Default
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct BackoffSettings {
    /// Maximum number of attempts, including the first (default 5).
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,

    /// Delay before the first retry in milliseconds (default 5000).
    #[serde(default = "default_initial_delay_ms")]
    initial_delay_ms: u64,

    /// Upper bound on any single delay in milliseconds (default 30000).
    #[serde(default = "default_max_delay_ms")]
    max_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    5
}

fn default_initial_delay_ms() -> u64 {
    5_000
}

fn default_max_delay_ms() -> u64 {
    30_000
}

impl Default for BackoffSettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl BackoffSettings {
    /// Creates a new backoff settings builder.
    pub fn builder() -> BackoffSettingsBuilder {
        BackoffSettingsBuilder::default()
    }

    /// Delay before the first retry.
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Cap on any single delay.
    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// Validates the retry budget and delay bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero or the initial delay
    /// exceeds the maximum delay.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be at least 1, got 0"));
        }
        if self.initial_delay_ms > self.max_delay_ms {
            return Err(ConfigError::new(format!(
                "initial_delay_ms ({}) must not exceed max_delay_ms ({})",
                self.initial_delay_ms, self.max_delay_ms
            )));
        }
        Ok(())
    }
}

/// Builder for `BackoffSettings`.
#[derive(Debug, Default)]
pub struct BackoffSettingsBuilder {
    max_attempts: Option<u32>,
    initial_delay_ms: Option<u64>,
    max_delay_ms: Option<u64>,
}

impl BackoffSettingsBuilder {
    /// Sets the maximum number of attempts.
    pub fn max_attempts(mut self, value: u32) -> Self {
        self.max_attempts = Some(value);
        self
    }

    /// Sets the initial delay in milliseconds.
    pub fn initial_delay_ms(mut self, value: u64) -> Self {
        self.initial_delay_ms = Some(value);
        self
    }

    /// Sets the maximum delay in milliseconds.
    pub fn max_delay_ms(mut self, value: u64) -> Self {
        self.max_delay_ms = Some(value);
        self
    }

    /// Builds the `BackoffSettings`. Call `validate` on the result before use.
    pub fn build(self) -> BackoffSettings {
        BackoffSettings {
            max_attempts: self.max_attempts.unwrap_or_else(default_max_attempts),
            initial_delay_ms: self.initial_delay_ms.unwrap_or_else(default_initial_delay_ms),
            max_delay_ms: self.max_delay_ms.unwrap_or_else(default_max_delay_ms),
        }
    }
}
