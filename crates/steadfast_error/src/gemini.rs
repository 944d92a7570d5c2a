//! Gemini-specific error types.

use crate::HttpStatus;
use std::time::Duration;

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// API request failed before a response arrived
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// Request did not complete within the allotted time
    #[display("Gemini API request timed out after {}ms", _0)]
    Timeout(u64),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
        /// Delay requested by the server via `Retry-After`
        retry_after: Option<Duration>,
    },
}

impl GeminiErrorKind {
    /// HTTP status of this error, if it came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use steadfast_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an HTTP status failure without a `Retry-After` hint.
    ///
    /// # Examples
    ///
    /// ```
    /// use steadfast_error::{GeminiError, HttpStatus};
    ///
    /// let err = GeminiError::http(503, "The model is overloaded");
    /// assert_eq!(err.status(), Some(503));
    /// assert!(err.retry_after().is_none());
    /// ```
    #[track_caller]
    pub fn http(status_code: u16, message: impl Into<String>) -> Self {
        Self::new(GeminiErrorKind::HttpError {
            status_code,
            message: message.into(),
            retry_after: None,
        })
    }
}

impl HttpStatus for GeminiError {
    fn status(&self) -> Option<u16> {
        self.kind.status_code()
    }

    fn retry_after(&self) -> Option<Duration> {
        match &self.kind {
            GeminiErrorKind::HttpError { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}
