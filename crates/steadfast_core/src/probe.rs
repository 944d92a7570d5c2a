//! Settings for the effective-model probe.

use crate::{DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_FLASH_MODEL, DEFAULT_GEMINI_MODEL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where and how to probe the default model for rate limiting.
///
/// # Examples
///
/// ```
/// use steadfast_core::{ProbeSettings, DEFAULT_GEMINI_MODEL};
/// use std::time::Duration;
///
/// let settings = ProbeSettings::default();
/// assert_eq!(settings.default_model(), DEFAULT_GEMINI_MODEL);
/// assert_eq!(settings.timeout(), Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct ProbeSettings {
    /// Base URL of the generation API.
    #[serde(default = "default_endpoint")]
    endpoint: String,

    /// Hard timeout for the probe request in milliseconds (default 2000).
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,

    /// The model that triggers probing when configured.
    #[serde(default = "default_model")]
    default_model: String,

    /// The model offered when the default model is rate-limited.
    #[serde(default = "default_fallback_model")]
    fallback_model: String,
}

fn default_endpoint() -> String {
    DEFAULT_GEMINI_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    2_000
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_fallback_model() -> String {
    DEFAULT_GEMINI_FLASH_MODEL.to_string()
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            default_model: default_model(),
            fallback_model: default_fallback_model(),
        }
    }
}

impl ProbeSettings {
    /// Creates a new probe settings builder.
    pub fn builder() -> ProbeSettingsBuilder {
        ProbeSettingsBuilder::default()
    }

    /// The probe timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Builder for `ProbeSettings`.
#[derive(Debug, Default)]
pub struct ProbeSettingsBuilder {
    endpoint: Option<String>,
    timeout_ms: Option<u64>,
    default_model: Option<String>,
    fallback_model: Option<String>,
}

impl ProbeSettingsBuilder {
    /// Sets the API base URL.
    pub fn endpoint(mut self, value: impl Into<String>) -> Self {
        self.endpoint = Some(value.into());
        self
    }

    /// Sets the probe timeout in milliseconds.
    pub fn timeout_ms(mut self, value: u64) -> Self {
        self.timeout_ms = Some(value);
        self
    }

    /// Sets the model that triggers probing.
    pub fn default_model(mut self, value: impl Into<String>) -> Self {
        self.default_model = Some(value.into());
        self
    }

    /// Sets the model offered as fallback.
    pub fn fallback_model(mut self, value: impl Into<String>) -> Self {
        self.fallback_model = Some(value.into());
        self
    }

    /// Builds the `ProbeSettings`.
    pub fn build(self) -> ProbeSettings {
        ProbeSettings {
            endpoint: self.endpoint.unwrap_or_else(default_endpoint),
            timeout_ms: self.timeout_ms.unwrap_or_else(default_timeout_ms),
            default_model: self.default_model.unwrap_or_else(default_model),
            fallback_model: self.fallback_model.unwrap_or_else(default_fallback_model),
        }
    }
}
