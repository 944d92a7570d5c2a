//! Mid-session fallback to the flash model.

use crate::{ModelSession, Operator};
use async_trait::async_trait;
use std::sync::Arc;
use steadfast_core::{AuthType, DEFAULT_GEMINI_FLASH_MODEL, ProbeSettings};
use steadfast_error::SteadfastResult;
use steadfast_retry::FallbackHandler;
use tracing::{debug, info, instrument};

/// [`FallbackHandler`] that offers to move the session to the flash model.
///
/// Asks the operator once; on a yes the shared [`ModelSession`] is switched
/// and the retry executor re-runs the operation immediately. Once the
/// session has switched, further offers are declined without prompting,
/// so one handler can be shared by concurrent executor calls.
///
/// # Example
///
/// ```rust,ignore
/// let session = ModelSession::new("gemini-2.5-pro");
/// let handler = FlashFallbackHandler::new(session.clone(), Arc::new(ConsoleOperator));
///
/// let config = RetryConfig::new(settings)
///     .with_auth_type(AuthType::LoginWithGoogle)
///     .with_fallback_handler(Arc::new(handler));
///
/// let response = retry_with_backoff(|| {
///     let session = session.clone();
///     async move { client.generate(&session.current_model().await, &prompt).await }
/// }, &config).await?;
/// ```
pub struct FlashFallbackHandler {
    session: ModelSession,
    operator: Arc<dyn Operator>,
    fallback_model: String,
}

impl std::fmt::Debug for FlashFallbackHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlashFallbackHandler")
            .field("session", &self.session)
            .field("fallback_model", &self.fallback_model)
            .finish_non_exhaustive()
    }
}

impl FlashFallbackHandler {
    /// Offer [`DEFAULT_GEMINI_FLASH_MODEL`] for `session`.
    pub fn new(session: ModelSession, operator: Arc<dyn Operator>) -> Self {
        Self::with_fallback_model(session, operator, DEFAULT_GEMINI_FLASH_MODEL)
    }

    /// Offer the `fallback_model` configured in `settings`.
    ///
    /// Use this when the session was probed with the same settings, so the
    /// probe and the mid-session prompt offer the same model.
    pub fn from_settings(
        session: ModelSession,
        operator: Arc<dyn Operator>,
        settings: &ProbeSettings,
    ) -> Self {
        Self::with_fallback_model(session, operator, settings.fallback_model().clone())
    }

    /// Offer `fallback_model` instead of the default flash model.
    pub fn with_fallback_model(
        session: ModelSession,
        operator: Arc<dyn Operator>,
        fallback_model: impl Into<String>,
    ) -> Self {
        Self {
            session,
            operator,
            fallback_model: fallback_model.into(),
        }
    }

    /// The session this handler switches.
    pub fn session(&self) -> &ModelSession {
        &self.session
    }
}

#[async_trait]
impl FallbackHandler for FlashFallbackHandler {
    #[instrument(skip(self), fields(fallback_model = %self.fallback_model))]
    async fn on_persistent_429(&self, auth_type: AuthType) -> SteadfastResult<bool> {
        if self.session.switched_during_session().await {
            debug!("Session already switched, not offering again");
            return Ok(false);
        }

        let current = self.session.current_model().await;
        if current == self.fallback_model {
            debug!("Already on the fallback model");
            return Ok(false);
        }

        let question = format!(
            "{} keeps returning 429 (rate limited). Switch to {} for the rest of this session?",
            current, self.fallback_model
        );
        if !self.operator.confirm(&question).await? {
            debug!("Operator declined fallback");
            return Ok(false);
        }

        self.session.switch_to(&self.fallback_model).await?;
        self.operator
            .notify(&format!(
                "Switched from {} to {} for this session.",
                current, self.fallback_model
            ))
            .await;
        info!(from = %current, to = %self.fallback_model, "Fallback model applied");
        Ok(true)
    }
}
