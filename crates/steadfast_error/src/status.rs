//! Status-code access for retry classification.

use std::time::Duration;

/// Status codes the default classifier treats as transient.
const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Errors that may carry an HTTP-like status code.
///
/// The retry executor never inspects error messages. It only looks at the
/// status reported here: `429` counts toward persistent rate limiting, and
/// `429`/`500`/`502`/`503`/`504` are retried by default. Errors without a
/// status are treated as permanent.
///
/// # Examples
///
/// ```
/// use steadfast_error::{GeminiError, GeminiErrorKind, HttpStatus};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 429,
///     message: "Resource exhausted".to_string(),
///     retry_after: None,
/// });
///
/// assert_eq!(err.status(), Some(429));
/// assert!(err.is_rate_limited());
/// ```
pub trait HttpStatus {
    /// The HTTP status associated with this failure, if any.
    fn status(&self) -> Option<u16>;

    /// Server-provided delay before the next attempt (the `Retry-After` header).
    fn retry_after(&self) -> Option<Duration> {
        None
    }

    /// Returns true when the status is 429 (Too Many Requests).
    fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

/// Returns true for statuses retried by the default classifier.
///
/// # Examples
///
/// ```
/// use steadfast_error::is_retryable_status;
///
/// assert!(is_retryable_status(429));
/// assert!(is_retryable_status(503));
/// assert!(!is_retryable_status(501));
/// assert!(!is_retryable_status(400));
/// ```
pub fn is_retryable_status(status: u16) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}

impl<T: HttpStatus + ?Sized> HttpStatus for Box<T> {
    fn status(&self) -> Option<u16> {
        (**self).status()
    }

    fn retry_after(&self) -> Option<Duration> {
        (**self).retry_after()
    }
}
