//! Default retry classification.

use steadfast_error::{HttpStatus, is_retryable_status};

/// Default `should_retry` predicate.
///
/// Retries when the error carries status 429, 500, 502, 503 or 504. Any
/// other status, or no status at all, is permanent.
pub fn default_should_retry<E: HttpStatus + ?Sized>(err: &E) -> bool {
    err.status().is_some_and(is_retryable_status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use steadfast_error::{GeminiError, GeminiErrorKind, HttpError};

    #[test]
    fn rate_limit_and_gateway_errors_retry() {
        for status in [429, 500, 502, 503, 504] {
            assert!(default_should_retry(&GeminiError::http(status, "transient")));
        }
    }

    #[test]
    fn client_errors_do_not_retry() {
        for status in [400, 401, 403, 404, 501] {
            assert!(!default_should_retry(&HttpError::with_status(status, "nope")));
        }
    }

    #[test]
    fn errors_without_status_do_not_retry() {
        assert!(!default_should_retry(&HttpError::new("connection reset")));
        assert!(!default_should_retry(&GeminiError::new(
            GeminiErrorKind::ApiRequest("dns failure".to_string())
        )));
    }
}
