//! Persistent rate-limit fallback policy.

use async_trait::async_trait;
use std::future::Future;
use steadfast_core::AuthType;
use steadfast_error::SteadfastResult;
use tracing::{debug, warn};

/// Consecutive 429s that trigger the fallback offer.
pub const PERSISTENT_429_THRESHOLD: u32 = 2;

/// Capability invoked on persistent rate limiting.
///
/// Return `Ok(true)` when a fallback model was applied and the executor
/// should retry immediately, `Ok(false)` to continue with the normal delay.
/// Errors are logged and treated as `Ok(false)`.
///
/// Closures `Fn(AuthType) -> impl Future<Output = SteadfastResult<bool>>`
/// implement this trait directly.
#[async_trait]
pub trait FallbackHandler: Send + Sync {
    /// Called with the session's auth mode after repeated 429s.
    async fn on_persistent_429(&self, auth_type: AuthType) -> SteadfastResult<bool>;
}

#[async_trait]
impl<F, Fut> FallbackHandler for F
where
    F: Fn(AuthType) -> Fut + Send + Sync,
    Fut: Future<Output = SteadfastResult<bool>> + Send + 'static,
{
    async fn on_persistent_429(&self, auth_type: AuthType) -> SteadfastResult<bool> {
        (self)(auth_type).await
    }
}

/// Decides when to surface the model fallback within one executor call.
///
/// The offer is made only when:
/// - the consecutive 429 count has just reached [`PERSISTENT_429_THRESHOLD`]
/// - the auth mode is a personal OAuth login
/// - a handler was supplied
/// - the handler has not been invoked yet in this call
pub struct FallbackPolicy<'a> {
    auth_type: Option<AuthType>,
    handler: Option<&'a dyn FallbackHandler>,
    triggered: bool,
}

impl std::fmt::Debug for FallbackPolicy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackPolicy")
            .field("auth_type", &self.auth_type)
            .field("has_handler", &self.handler.is_some())
            .field("triggered", &self.triggered)
            .finish()
    }
}

impl<'a> FallbackPolicy<'a> {
    /// Create a policy for one executor invocation.
    pub fn new(auth_type: Option<AuthType>, handler: Option<&'a dyn FallbackHandler>) -> Self {
        Self {
            auth_type,
            handler,
            triggered: false,
        }
    }

    /// Whether the handler has been invoked during this invocation.
    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Whether a handler call is due at this consecutive 429 count.
    pub fn should_offer(&self, consecutive_429_count: u32) -> bool {
        consecutive_429_count == PERSISTENT_429_THRESHOLD
            && !self.triggered
            && self.handler.is_some()
            && self.auth_type.is_some_and(|auth| auth.is_oauth())
    }

    /// Invoke the handler if due and report whether a fallback was applied.
    ///
    /// The handler runs at most once per policy, whatever it returns.
    pub async fn consult(&mut self, consecutive_429_count: u32) -> bool {
        if !self.should_offer(consecutive_429_count) {
            return false;
        }
        let (Some(handler), Some(auth_type)) = (self.handler, self.auth_type) else {
            return false;
        };

        self.triggered = true;
        match handler.on_persistent_429(auth_type).await {
            Ok(applied) => {
                debug!(applied, %auth_type, "Fallback handler responded");
                applied
            }
            Err(e) => {
                warn!(error = %e, "Fallback handler failed, continuing with original error");
                false
            }
        }
    }
}
