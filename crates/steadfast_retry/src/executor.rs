//! The retry-with-backoff executor.

use crate::{Backoff, FallbackHandler, FallbackPolicy, RetryError, default_should_retry, sleep_or_cancel};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use steadfast_core::{AuthType, BackoffSettings};
use steadfast_error::HttpStatus;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

type Classifier<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// Configuration for one or more [`retry_with_backoff`] calls.
///
/// Cloning is cheap; the classifier and handler are shared.
///
/// # Example
///
/// ```
/// use steadfast_retry::RetryConfig;
/// use steadfast_core::{AuthType, BackoffSettings};
/// use steadfast_error::GeminiError;
///
/// let config: RetryConfig<GeminiError> = RetryConfig::new(BackoffSettings::default())
///     .with_auth_type(AuthType::UseGemini);
///
/// assert_eq!(*config.settings().max_attempts(), 5);
/// assert_eq!(config.auth_type(), Some(AuthType::UseGemini));
/// ```
pub struct RetryConfig<E> {
    settings: BackoffSettings,
    should_retry: Classifier<E>,
    auth_type: Option<AuthType>,
    on_persistent_429: Option<Arc<dyn FallbackHandler>>,
    cancellation: Option<CancellationToken>,
}

impl<E> Clone for RetryConfig<E> {
    fn clone(&self) -> Self {
        Self {
            settings: self.settings.clone(),
            should_retry: Arc::clone(&self.should_retry),
            auth_type: self.auth_type,
            on_persistent_429: self.on_persistent_429.clone(),
            cancellation: self.cancellation.clone(),
        }
    }
}

impl<E> fmt::Debug for RetryConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryConfig")
            .field("settings", &self.settings)
            .field("auth_type", &self.auth_type)
            .field("has_fallback_handler", &self.on_persistent_429.is_some())
            .field("cancellable", &self.cancellation.is_some())
            .finish_non_exhaustive()
    }
}

impl<E: HttpStatus + 'static> RetryConfig<E> {
    /// Create a configuration using the default status-based classifier.
    pub fn new(settings: BackoffSettings) -> Self {
        Self {
            settings,
            should_retry: Arc::new(default_should_retry::<E>),
            auth_type: None,
            on_persistent_429: None,
            cancellation: None,
        }
    }
}

impl<E: HttpStatus + 'static> Default for RetryConfig<E> {
    fn default() -> Self {
        Self::new(BackoffSettings::default())
    }
}

impl<E> RetryConfig<E> {
    /// Replace the retry predicate.
    pub fn with_should_retry(mut self, should_retry: impl Fn(&E) -> bool + Send + Sync + 'static) -> Self {
        self.should_retry = Arc::new(should_retry);
        self
    }

    /// Set how the caller is authenticated.
    pub fn with_auth_type(mut self, auth_type: AuthType) -> Self {
        self.auth_type = Some(auth_type);
        self
    }

    /// Set the handler consulted on persistent rate limiting.
    pub fn with_fallback_handler(mut self, handler: Arc<dyn FallbackHandler>) -> Self {
        self.on_persistent_429 = Some(handler);
        self
    }

    /// Abort pending delays and further attempts when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// The numeric retry settings.
    pub fn settings(&self) -> &BackoffSettings {
        &self.settings
    }

    /// The configured auth mode.
    pub fn auth_type(&self) -> Option<AuthType> {
        self.auth_type
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation.as_ref().is_some_and(CancellationToken::is_cancelled)
    }
}

/// Counters local to one executor invocation.
#[derive(Debug)]
struct AttemptState {
    attempt_number: u32,
    consecutive_429_count: u32,
}

impl AttemptState {
    fn new() -> Self {
        Self {
            attempt_number: 1,
            consecutive_429_count: 0,
        }
    }

    fn record_failure(&mut self, rate_limited: bool) {
        if rate_limited {
            self.consecutive_429_count += 1;
        } else {
            self.consecutive_429_count = 0;
        }
    }

    fn exhausted<E: HttpStatus>(&self, err: E) -> RetryError<E> {
        if err.is_rate_limited() {
            RetryError::RateLimitExceeded {
                attempts: self.attempt_number,
                last: err,
            }
        } else {
            RetryError::Operation(err)
        }
    }
}

/// Run `operation` until it succeeds, fails permanently, or runs out of attempts.
///
/// Each failure is classified with the configured predicate. Permanent
/// failures are returned immediately as [`RetryError::Operation`]. Retryable
/// failures wait for the next backoff delay (±30% jitter, capped at
/// `max_delay`), unless the server supplied a `Retry-After` for a 429, in
/// which case that delay is used and the backoff sequence restarts.
///
/// After two consecutive 429s under a personal OAuth login the fallback
/// handler is consulted once. If it applies a fallback, the next attempt runs
/// immediately and the backoff sequence does not advance. Every attempt,
/// including that one, counts against `max_attempts`.
///
/// When attempts run out the last error is returned, or
/// [`RetryError::RateLimitExceeded`] if it was a 429.
///
/// # Errors
///
/// See [`RetryError`].
#[instrument(
    name = "retry_with_backoff",
    skip_all,
    fields(
        max_attempts = *config.settings.max_attempts(),
        auth_type = ?config.auth_type,
    )
)]
pub async fn retry_with_backoff<T, E, F, Fut>(
    mut operation: F,
    config: &RetryConfig<E>,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: HttpStatus + fmt::Display,
{
    let max_attempts = (*config.settings.max_attempts()).max(1);
    let mut state = AttemptState::new();
    let mut backoff = Backoff::new(&config.settings);
    let mut policy = FallbackPolicy::new(config.auth_type, config.on_persistent_429.as_deref());

    loop {
        if config.is_cancelled() {
            return Err(RetryError::Cancelled {
                attempts: state.attempt_number - 1,
            });
        }

        let err = match operation().await {
            Ok(value) => {
                if state.attempt_number > 1 {
                    debug!(attempt = state.attempt_number, "Operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) => e,
        };

        if !(config.should_retry)(&err) {
            debug!(
                attempt = state.attempt_number,
                status = ?err.status(),
                error = %err,
                "Permanent error, failing immediately"
            );
            return Err(RetryError::Operation(err));
        }

        let rate_limited = err.is_rate_limited();
        state.record_failure(rate_limited);

        if policy.consult(state.consecutive_429_count).await {
            state.consecutive_429_count = 0;
            if state.attempt_number >= max_attempts {
                error!(attempts = state.attempt_number, "Fallback applied but no attempts remain");
                return Err(state.exhausted(err));
            }
            info!(
                attempt = state.attempt_number,
                "Fallback model applied, retrying immediately"
            );
            state.attempt_number += 1;
            continue;
        }

        if state.attempt_number >= max_attempts {
            error!(
                attempts = state.attempt_number,
                status = ?err.status(),
                error = %err,
                "Retry attempts exhausted"
            );
            return Err(state.exhausted(err));
        }

        let delay = next_delay(&mut backoff, &err, rate_limited);
        warn!(
            attempt = state.attempt_number,
            max_attempts,
            delay_ms = delay.as_millis() as u64,
            consecutive_429 = state.consecutive_429_count,
            status = ?err.status(),
            error = %err,
            "Transient error, will retry"
        );

        if !sleep_or_cancel(delay, config.cancellation.as_ref()).await {
            debug!(attempt = state.attempt_number, "Retry cancelled during backoff");
            return Err(RetryError::Cancelled {
                attempts: state.attempt_number,
            });
        }
        state.attempt_number += 1;
    }
}

/// Honor a server `Retry-After` on 429s, otherwise take the next jittered step.
fn next_delay<E: HttpStatus>(backoff: &mut Backoff, err: &E, rate_limited: bool) -> Duration {
    match err.retry_after().filter(|_| rate_limited) {
        Some(retry_after) => {
            backoff.reset();
            retry_after.min(backoff.max())
        }
        None => backoff.next_delay(&mut rand::thread_rng()),
    }
}
