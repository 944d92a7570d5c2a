//! Configuration command handler.

use super::commands::OutputFormat;
use std::path::Path;
use steadfast::{SteadfastConfig, SteadfastResult};
use tracing::debug;

/// Load configuration from `path`, or from the default locations when absent.
pub fn load_config(path: Option<&Path>) -> SteadfastResult<SteadfastConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading explicit configuration file");
            SteadfastConfig::from_file(path)
        }
        None => SteadfastConfig::load(),
    }
}

/// Render `config` in the requested format.
pub fn show_config(
    config: &SteadfastConfig,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(config),
        OutputFormat::Human => Ok(render_human(config)),
    }
}

fn render_human(config: &SteadfastConfig) -> String {
    let auth_type = config
        .auth_type
        .map(|auth| auth.to_string())
        .unwrap_or_else(|| "(not set)".to_string());

    let mut out = format!("auth_type: {}\n", auth_type);
    out.push_str("\n[retry]\n");
    out.push_str(&format!("  max_attempts:     {}\n", config.retry.max_attempts()));
    out.push_str(&format!("  initial_delay_ms: {}\n", config.retry.initial_delay_ms()));
    out.push_str(&format!("  max_delay_ms:     {}\n", config.retry.max_delay_ms()));
    out.push_str("\n[probe]\n");
    out.push_str(&format!("  endpoint:       {}\n", config.probe.endpoint()));
    out.push_str(&format!("  timeout_ms:     {}\n", config.probe.timeout_ms()));
    out.push_str(&format!("  default_model:  {}\n", config.probe.default_model()));
    out.push_str(&format!("  fallback_model: {}", config.probe.fallback_model()));
    out
}
