//! Retry with exponential backoff and persistent rate-limit fallback.
//!
//! This crate drives an arbitrary asynchronous operation until it succeeds,
//! fails permanently, or exhausts its attempt budget:
//!
//! - **Backoff**: delays double from `initial_delay` up to `max_delay`, with
//!   ±30% jitter so concurrent callers do not retry in lockstep
//! - **Classification**: only failures whose [`HttpStatus`] is 429 or a
//!   transient 5xx are retried by default
//! - **Fallback**: after two consecutive 429s under a personal OAuth login,
//!   an injected [`FallbackHandler`] may switch to a lighter model, in which
//!   case the next attempt runs immediately
//! - **Cancellation**: pending delays are dropped when the configured
//!   `CancellationToken` fires
//!
//! # Example
//!
//! ```rust,ignore
//! use steadfast_retry::{retry_with_backoff, RetryConfig};
//! use steadfast_core::{AuthType, BackoffSettings};
//!
//! let config = RetryConfig::new(BackoffSettings::default())
//!     .with_auth_type(AuthType::LoginWithGoogle)
//!     .with_fallback_handler(handler);
//!
//! let response = retry_with_backoff(|| client.generate(&request), &config).await?;
//! ```
//!
//! [`HttpStatus`]: steadfast_error::HttpStatus

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backoff;
mod classify;
mod config;
mod error;
mod executor;
mod policy;

pub use backoff::{Backoff, JITTER_FACTOR, apply_jitter, sleep_or_cancel};
pub use classify::default_should_retry;
pub use config::SteadfastConfig;
pub use error::RetryError;
pub use executor::{RetryConfig, retry_with_backoff};
pub use policy::{FallbackHandler, FallbackPolicy, PERSISTENT_429_THRESHOLD};

pub use tokio_util::sync::CancellationToken;
