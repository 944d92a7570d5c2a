//! Probe command handler.

use std::sync::Arc;
use steadfast::{
    AutoAnswer, ConsoleOperator, EffectiveModel, EffectiveModelProbe, GeminiError,
    GeminiErrorKind, Operator, SteadfastConfig, SteadfastResult,
};
use tracing::{info, instrument};

/// Environment variable holding the API key.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Run the effective-model probe for `model`, or the configured default.
///
/// With `yes`, a rate-limited default is switched to the fallback without
/// prompting.
///
/// # Errors
///
/// Returns an error if `GEMINI_API_KEY` is unset or the HTTP client cannot
/// be created. Probe failures themselves keep the requested model.
#[instrument(skip(config))]
pub async fn run_probe(
    config: &SteadfastConfig,
    model: Option<String>,
    yes: bool,
) -> SteadfastResult<EffectiveModel> {
    let api_key = std::env::var(API_KEY_VAR)
        .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
    let model = model.unwrap_or_else(|| config.probe.default_model().clone());

    let operator: Arc<dyn Operator> = if yes {
        Arc::new(AutoAnswer(true))
    } else {
        Arc::new(ConsoleOperator)
    };

    let probe = EffectiveModelProbe::from_settings(&config.probe, operator)?;
    let outcome = probe.check(&api_key, &model).await;

    info!(requested = %model, effective = outcome.model(), "Effective model resolved");
    Ok(outcome)
}
