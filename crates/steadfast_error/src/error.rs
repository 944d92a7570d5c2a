//! Top-level error wrapper types.

use crate::{ConfigError, FallbackError, GeminiError, HttpError, HttpStatus};
use std::time::Duration;

/// The foundation error enum shared by every Steadfast crate.
///
/// # Examples
///
/// ```
/// use steadfast_error::{SteadfastError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: SteadfastError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SteadfastErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini API error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Fallback handler error
    #[from(FallbackError)]
    Fallback(FallbackError),
}

/// Steadfast error with kind discrimination.
///
/// # Examples
///
/// ```
/// use steadfast_error::{ConfigError, SteadfastResult};
///
/// fn might_fail() -> SteadfastResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Steadfast Error: {}", _0)]
pub struct SteadfastError(Box<SteadfastErrorKind>);

impl SteadfastError {
    /// Create a new error from a kind.
    pub fn new(kind: SteadfastErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SteadfastErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to SteadfastErrorKind
impl<T> From<T> for SteadfastError
where
    T: Into<SteadfastErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl HttpStatus for SteadfastError {
    fn status(&self) -> Option<u16> {
        match self.kind() {
            SteadfastErrorKind::Http(e) => e.status(),
            SteadfastErrorKind::Gemini(e) => e.status(),
            SteadfastErrorKind::Config(_) | SteadfastErrorKind::Fallback(_) => None,
        }
    }

    fn retry_after(&self) -> Option<Duration> {
        match self.kind() {
            SteadfastErrorKind::Gemini(e) => e.retry_after(),
            _ => None,
        }
    }
}

/// Result type for Steadfast operations.
///
/// # Examples
///
/// ```
/// use steadfast_error::{SteadfastResult, HttpError};
///
/// fn fetch_data() -> SteadfastResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type SteadfastResult<T> = std::result::Result<T, SteadfastError>;
