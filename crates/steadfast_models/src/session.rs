//! Session-scoped model state.

use std::sync::Arc;
use steadfast_error::{FallbackError, FallbackErrorKind};
use tokio::sync::RwLock;
use tracing::{info, instrument};

#[derive(Debug)]
struct SessionState {
    model: String,
    switched_during_session: bool,
}

/// The active model for one session.
///
/// Clones share the same state, so the probe, the fallback handler and the
/// code issuing requests all see a switch as soon as it happens. Nothing is
/// persisted; a new session starts from its configured model again.
///
/// # Example
///
/// ```
/// use steadfast_models::ModelSession;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let session = ModelSession::new("gemini-2.5-pro");
/// let handle = session.clone();
///
/// session.switch_to("gemini-2.5-flash").await.unwrap();
///
/// assert_eq!(handle.current_model().await, "gemini-2.5-flash");
/// assert!(handle.switched_during_session().await);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ModelSession {
    inner: Arc<RwLock<SessionState>>,
}

impl ModelSession {
    /// Start a session on `model`.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionState {
                model: model.into(),
                switched_during_session: false,
            })),
        }
    }

    /// The model requests should currently use.
    pub async fn current_model(&self) -> String {
        self.inner.read().await.model.clone()
    }

    /// Whether a fallback switch already happened in this session.
    pub async fn switched_during_session(&self) -> bool {
        self.inner.read().await.switched_during_session
    }

    /// Switch the session to `model` for the rest of its lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error if `model` is empty.
    #[instrument(skip(self))]
    pub async fn switch_to(&self, model: &str) -> Result<(), FallbackError> {
        if model.trim().is_empty() {
            return Err(FallbackError::new(FallbackErrorKind::Switch(
                "model name must not be empty".to_string(),
            )));
        }

        let mut state = self.inner.write().await;
        info!(from = %state.model, to = model, "Switching session model");
        state.model = model.to_string();
        state.switched_during_session = true;
        Ok(())
    }
}
