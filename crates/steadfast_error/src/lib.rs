//! Error types for the Steadfast library.
//!
//! This crate provides the foundation error types used throughout the Steadfast workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Errors that originate from an HTTP exchange implement [`HttpStatus`], which is
//! how the retry executor decides whether a failure is a rate limit or a
//! transient server error.
//!
//! # Examples
//!
//! ```
//! use steadfast_error::{HttpError, HttpStatus, SteadfastResult};
//!
//! fn fetch_data() -> SteadfastResult<String> {
//!     Err(HttpError::with_status(503, "Service unavailable"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => assert_eq!(e.status(), Some(503)),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod fallback;
mod gemini;
mod http;
mod status;

pub use config::ConfigError;
pub use error::{SteadfastError, SteadfastErrorKind, SteadfastResult};
pub use fallback::{FallbackError, FallbackErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use status::{HttpStatus, is_retryable_status};
