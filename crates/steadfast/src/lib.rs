//! Steadfast - resilient invocation of rate-limited generation APIs
//!
//! Steadfast wraps calls to the Gemini API so that transient failures are
//! retried with exponential backoff, persistent rate limiting under a
//! personal login can fall back to a lighter model, and a session can check
//! up front whether its default model is currently rate-limited.
//!
//! # Features
//!
//! - **Retry with backoff**: doubling delays with ±30% jitter, capped and
//!   cancellable
//! - **Rate-limit fallback**: after two consecutive 429s an injected handler
//!   may switch the session to the flash model and retry immediately
//! - **Effective-model probe**: one minimal request before the session
//!   starts, failing open on timeouts and network errors
//! - **Layered configuration**: bundled defaults overridden by user TOML files
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use steadfast::{
//!     ConsoleOperator, FlashFallbackHandler, ModelSession, SteadfastConfig,
//!     retry_with_backoff,
//! };
//! use std::sync::Arc;
//!
//! let config = SteadfastConfig::load()?;
//! let session = ModelSession::new(config.probe.default_model().clone());
//! let handler = FlashFallbackHandler::from_settings(
//!     session.clone(),
//!     Arc::new(ConsoleOperator),
//!     &config.probe,
//! );
//!
//! let retry = config
//!     .retry_config()
//!     .with_fallback_handler(Arc::new(handler));
//!
//! let text = retry_with_backoff(|| client.generate(&session, &prompt), &retry).await?;
//! ```
//!
//! # Architecture
//!
//! Steadfast is organized as a workspace with focused crates:
//!
//! - `steadfast_error` - Error types and the `HttpStatus` classification trait
//! - `steadfast_core` - Auth modes, model identifiers and settings
//! - `steadfast_retry` - The retry executor, fallback policy and configuration
//! - `steadfast_models` - Effective-model probe, operator prompts and session state
//!
//! This crate (`steadfast`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod telemetry;

pub use telemetry::{LoggingConfig, init_logging};

// Re-export error types
pub use steadfast_error::{
    ConfigError, FallbackError, FallbackErrorKind, GeminiError, GeminiErrorKind, HttpError,
    HttpStatus, SteadfastError, SteadfastErrorKind, SteadfastResult, is_retryable_status,
};

// Re-export core types
pub use steadfast_core::{
    AuthType, BackoffSettings, BackoffSettingsBuilder, DEFAULT_GEMINI_ENDPOINT,
    DEFAULT_GEMINI_FLASH_MODEL, DEFAULT_GEMINI_MODEL, ProbeSettings, ProbeSettingsBuilder,
};

// Re-export retry
pub use steadfast_retry::{
    Backoff, CancellationToken, FallbackHandler, FallbackPolicy, JITTER_FACTOR,
    PERSISTENT_429_THRESHOLD, RetryConfig, RetryError, SteadfastConfig, apply_jitter,
    default_should_retry, retry_with_backoff, sleep_or_cancel,
};

// Re-export models
pub use steadfast_models::{
    AutoAnswer, ConsoleOperator, EffectiveModel, EffectiveModelProbe, FlashFallbackHandler,
    GeminiResult, GenerationConfig, HttpProbeTransport, ModelSession, Operator, ProbeContent,
    ProbePart, ProbeRequest, ProbeTransport, ThinkingConfig, get_effective_model,
    is_affirmative,
};
