//! Delay schedule, jitter and cancellable sleep.

use rand::Rng;
use std::time::Duration;
use steadfast_core::BackoffSettings;
use tokio_util::sync::CancellationToken;

/// Fraction of a delay that jitter may add or remove.
pub const JITTER_FACTOR: f64 = 0.3;

/// Exponential delay sequence: `initial`, `2 * initial`, `4 * initial`, ...
/// capped at `max`.
///
/// The sequence only advances when a delay is actually taken, so retries
/// that skip their delay (an accepted model fallback) do not grow it.
///
/// # Example
///
/// ```
/// use steadfast_retry::Backoff;
/// use steadfast_core::BackoffSettings;
/// use std::time::Duration;
///
/// let settings = BackoffSettings::builder()
///     .initial_delay_ms(100)
///     .max_delay_ms(300)
///     .build();
/// let mut backoff = Backoff::new(&settings);
///
/// assert_eq!(backoff.advance(), Duration::from_millis(100));
/// assert_eq!(backoff.advance(), Duration::from_millis(200));
/// assert_eq!(backoff.advance(), Duration::from_millis(300)); // Capped
/// ```
#[derive(Debug, Clone)]
pub struct Backoff {
    initial: Duration,
    max: Duration,
    current: Duration,
}

impl Backoff {
    /// Start a new sequence from the settings' initial delay.
    pub fn new(settings: &BackoffSettings) -> Self {
        let initial = settings.initial_delay().min(settings.max_delay());
        Self {
            initial,
            max: settings.max_delay(),
            current: initial,
        }
    }

    /// The unjittered delay the next call to [`Backoff::advance`] will return.
    pub fn peek(&self) -> Duration {
        self.current
    }

    /// Return the unjittered delay for this step and double the next one.
    pub fn advance(&mut self) -> Duration {
        let delay = self.current;
        self.current = self.current.saturating_mul(2).min(self.max);
        delay
    }

    /// Return this step's delay with jitter applied, then advance.
    pub fn next_delay<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Duration {
        let base = self.advance();
        apply_jitter(base, self.max, rng)
    }

    /// Restart the sequence from the initial delay.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }

    /// Upper bound on any delay from this sequence.
    pub fn max(&self) -> Duration {
        self.max
    }
}

/// Perturb `delay` uniformly within ±[`JITTER_FACTOR`], floored at zero and
/// re-capped at `max`.
pub fn apply_jitter<R: Rng + ?Sized>(delay: Duration, max: Duration, rng: &mut R) -> Duration {
    let base = delay.as_secs_f64();
    let jitter = base * JITTER_FACTOR * rng.gen_range(-1.0..=1.0);
    Duration::from_secs_f64((base + jitter).max(0.0)).min(max)
}

/// Sleep for `delay` unless `token` is cancelled first.
///
/// Returns `true` if the full delay elapsed and `false` on cancellation. The
/// pending timer is dropped as soon as the token fires.
pub async fn sleep_or_cancel(delay: Duration, token: Option<&CancellationToken>) -> bool {
    match token {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => false,
                _ = tokio::time::sleep(delay) => true,
            }
        }
        None => {
            tokio::time::sleep(delay).await;
            true
        }
    }
}
