//! Error returned by the retry executor.

use std::error::Error;
use std::fmt;
use steadfast_error::HttpStatus;

/// Why a retried operation ultimately failed.
///
/// `Operation` carries the original error untouched, so its message is
/// exactly what the operation reported. `RateLimitExceeded` is synthesized
/// when the attempt budget ran out on a 429.
#[derive(Debug)]
pub enum RetryError<E> {
    /// The operation failed with a non-retryable error, or exhausted its
    /// attempts on a failure that was not a rate limit.
    Operation(E),
    /// Attempts were exhausted and the final failure was a 429.
    RateLimitExceeded {
        /// Number of attempts made
        attempts: u32,
        /// The last rate-limit error observed
        last: E,
    },
    /// The cancellation token fired before the operation succeeded.
    Cancelled {
        /// Number of attempts made before cancellation
        attempts: u32,
    },
}

impl<E> RetryError<E> {
    /// The last error reported by the operation, if any.
    pub fn last_error(&self) -> Option<&E> {
        match self {
            RetryError::Operation(e) | RetryError::RateLimitExceeded { last: e, .. } => Some(e),
            RetryError::Cancelled { .. } => None,
        }
    }

    /// Consume this error, returning the last operation error, if any.
    pub fn into_last_error(self) -> Option<E> {
        match self {
            RetryError::Operation(e) | RetryError::RateLimitExceeded { last: e, .. } => Some(e),
            RetryError::Cancelled { .. } => None,
        }
    }

    /// Returns true when retries ran out on rate limiting.
    pub fn is_rate_limit_exceeded(&self) -> bool {
        matches!(self, RetryError::RateLimitExceeded { .. })
    }

    /// Returns true when the invocation was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RetryError::Cancelled { .. })
    }
}

impl<E: fmt::Display> fmt::Display for RetryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryError::Operation(e) => write!(f, "{}", e),
            RetryError::RateLimitExceeded { attempts, .. } => {
                write!(f, "Rate limit exceeded after {} attempts", attempts)
            }
            RetryError::Cancelled { attempts } => {
                write!(f, "Retry cancelled after {} attempts", attempts)
            }
        }
    }
}

impl<E: Error + 'static> Error for RetryError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RetryError::Operation(e) => e.source(),
            RetryError::RateLimitExceeded { last, .. } => Some(last),
            RetryError::Cancelled { .. } => None,
        }
    }
}

impl<E: HttpStatus> HttpStatus for RetryError<E> {
    fn status(&self) -> Option<u16> {
        match self {
            RetryError::Operation(e) => e.status(),
            RetryError::RateLimitExceeded { .. } => Some(429),
            RetryError::Cancelled { .. } => None,
        }
    }
}
