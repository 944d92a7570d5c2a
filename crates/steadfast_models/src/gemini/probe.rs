//! Pre-session effective-model check.

use super::{HttpProbeTransport, ProbeRequest, ProbeTransport};
use crate::{ConsoleOperator, ModelSession, Operator};
use std::sync::Arc;
use std::time::Duration;
use steadfast_core::ProbeSettings;
use tracing::{debug, instrument};

/// Outcome of an effective-model check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectiveModel {
    /// Keep the configured model
    Configured(String),
    /// The operator accepted the fallback model
    Fallback(String),
}

impl EffectiveModel {
    /// The model to use.
    pub fn model(&self) -> &str {
        match self {
            EffectiveModel::Configured(model) | EffectiveModel::Fallback(model) => model,
        }
    }

    /// Consume the outcome, returning the model to use.
    pub fn into_model(self) -> String {
        match self {
            EffectiveModel::Configured(model) | EffectiveModel::Fallback(model) => model,
        }
    }

    /// Whether the fallback model was chosen.
    pub fn is_fallback(&self) -> bool {
        matches!(self, EffectiveModel::Fallback(_))
    }
}

/// Checks whether the default model is rate-limited before a session starts.
///
/// Only the configured default model is probed. The probe is a single
/// minimal request with a hard timeout; a 429 prompts the operator to switch
/// to the fallback model. Every other outcome, including timeouts and
/// network errors, keeps the configured model.
///
/// # Example
///
/// ```rust,ignore
/// use steadfast_models::{ConsoleOperator, EffectiveModelProbe};
/// use steadfast_core::ProbeSettings;
/// use std::sync::Arc;
///
/// let probe = EffectiveModelProbe::from_settings(&ProbeSettings::default(), Arc::new(ConsoleOperator))?;
/// let model = probe.get_effective_model(&api_key, "gemini-2.5-pro").await;
/// ```
#[derive(Clone)]
pub struct EffectiveModelProbe {
    transport: Arc<dyn ProbeTransport>,
    operator: Arc<dyn Operator>,
    default_model: String,
    fallback_model: String,
    timeout: Duration,
}

impl std::fmt::Debug for EffectiveModelProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectiveModelProbe")
            .field("default_model", &self.default_model)
            .field("fallback_model", &self.fallback_model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl EffectiveModelProbe {
    /// Creates a probe with an explicit transport and operator.
    pub fn new(
        settings: &ProbeSettings,
        transport: Arc<dyn ProbeTransport>,
        operator: Arc<dyn Operator>,
    ) -> Self {
        Self {
            transport,
            operator,
            default_model: settings.default_model().clone(),
            fallback_model: settings.fallback_model().clone(),
            timeout: settings.timeout(),
        }
    }

    /// Creates a probe that talks to the REST API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_settings(
        settings: &ProbeSettings,
        operator: Arc<dyn Operator>,
    ) -> crate::GeminiResult<Self> {
        let transport = HttpProbeTransport::new(settings)?;
        Ok(Self::new(settings, Arc::new(transport), operator))
    }

    /// Decide which model to use for `current_model`.
    ///
    /// Never fails: any problem reaching the API keeps `current_model`.
    #[instrument(skip(self, api_key), fields(default_model = %self.default_model))]
    pub async fn check(&self, api_key: &str, current_model: &str) -> EffectiveModel {
        let keep = || EffectiveModel::Configured(current_model.to_string());

        if current_model != self.default_model {
            debug!("Model is not the default, skipping probe");
            return keep();
        }

        let request = ProbeRequest::minimal();
        let status = match tokio::time::timeout(
            self.timeout,
            self.transport.send_probe(current_model, api_key, &request),
        )
        .await
        {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                debug!(error = %e, "Probe failed, keeping configured model");
                return keep();
            }
            Err(_) => {
                debug!(timeout_ms = self.timeout.as_millis() as u64, "Probe timed out, keeping configured model");
                return keep();
            }
        };

        if status != 429 {
            debug!(status, "Default model is available");
            return keep();
        }

        self.offer_fallback(current_model).await
    }

    /// Like [`check`](Self::check), returning just the model name.
    pub async fn get_effective_model(&self, api_key: &str, current_model: &str) -> String {
        self.check(api_key, current_model).await.into_model()
    }

    /// Probe the session's active model and record an accepted fallback in it.
    #[instrument(skip(self, session, api_key))]
    pub async fn apply_to(&self, session: &ModelSession, api_key: &str) -> EffectiveModel {
        let current = session.current_model().await;
        let outcome = self.check(api_key, &current).await;

        if let EffectiveModel::Fallback(model) = &outcome {
            if let Err(e) = session.switch_to(model).await {
                debug!(error = %e, "Could not record fallback in session");
                return EffectiveModel::Configured(current);
            }
        }
        outcome
    }

    async fn offer_fallback(&self, current_model: &str) -> EffectiveModel {
        self.operator
            .notify(&format!(
                "The {} model is currently rate-limited (HTTP 429).",
                current_model
            ))
            .await;

        let question = format!(
            "Switch to {} for the rest of this session?",
            self.fallback_model
        );
        let accepted = match self.operator.confirm(&question).await {
            Ok(accepted) => accepted,
            Err(e) => {
                debug!(error = %e, "Operator prompt failed, keeping configured model");
                false
            }
        };

        if !accepted {
            return EffectiveModel::Configured(current_model.to_string());
        }

        self.operator
            .notify(&format!(
                "Switched to {} for this session.",
                self.fallback_model
            ))
            .await;
        EffectiveModel::Fallback(self.fallback_model.clone())
    }
}

/// Effective model for `current_model` using the default REST endpoint and
/// an interactive console prompt.
///
/// Returns `current_model` unchanged if the HTTP client cannot be created.
pub async fn get_effective_model(api_key: &str, current_model: &str) -> String {
    match EffectiveModelProbe::from_settings(&ProbeSettings::default(), Arc::new(ConsoleOperator)) {
        Ok(probe) => probe.get_effective_model(api_key, current_model).await,
        Err(e) => {
            debug!(error = %e, "Probe unavailable, keeping configured model");
            current_model.to_string()
        }
    }
}
