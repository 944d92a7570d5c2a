//! Core data types for the Steadfast resilient invocation library.
//!
//! This crate provides the foundation types shared by the retry executor, the
//! model probe and the CLI: authentication modes, model identifiers and the
//! serde-loadable settings for backoff and probing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod backoff;
mod model;
mod probe;

pub use auth::AuthType;
pub use backoff::{BackoffSettings, BackoffSettingsBuilder};
pub use model::{DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_FLASH_MODEL, DEFAULT_GEMINI_MODEL};
pub use probe::{ProbeSettings, ProbeSettingsBuilder};
