//! Wire types for the probe request.

use serde::{Deserialize, Serialize};

/// Body of a minimal `models/{model}:generateContent` request.
///
/// # Example
///
/// ```
/// use steadfast_models::ProbeRequest;
///
/// let json = serde_json::to_value(ProbeRequest::minimal()).unwrap();
/// assert_eq!(json["generationConfig"]["maxOutputTokens"], 1);
/// assert_eq!(json["generationConfig"]["thinkingConfig"]["thinkingBudget"], 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeRequest {
    /// Conversation turns (a single one-word user turn)
    pub contents: Vec<ProbeContent>,

    /// Generation parameters
    pub generation_config: GenerationConfig,
}

impl ProbeRequest {
    /// The cheapest request the API will accept: one word in, one token out,
    /// deterministic sampling and no thinking.
    pub fn minimal() -> Self {
        Self {
            contents: vec![ProbeContent {
                role: "user".to_string(),
                parts: vec![ProbePart {
                    text: "test".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 1,
                temperature: 0.0,
                top_k: 1,
                thinking_config: ThinkingConfig {
                    thinking_budget: 0,
                    include_thoughts: false,
                },
            },
        }
    }
}

/// A conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeContent {
    /// Author of the turn
    pub role: String,
    /// Turn content
    pub parts: Vec<ProbePart>,
}

/// Text part of a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbePart {
    /// Prompt text
    pub text: String,
}

/// Generation parameters for the probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling
    pub top_k: u32,
    /// Thinking budget controls
    pub thinking_config: ThinkingConfig,
}

/// Disables model thinking for the probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    /// Token budget for thinking
    pub thinking_budget: u32,
    /// Whether thoughts are returned
    pub include_thoughts: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_request_wire_shape() {
        let json = serde_json::to_value(ProbeRequest::minimal()).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "test");

        let config = &json["generationConfig"];
        assert_eq!(config["maxOutputTokens"], 1);
        assert_eq!(config["temperature"], 0.0);
        assert_eq!(config["topK"], 1);
        assert_eq!(config["thinkingConfig"]["thinkingBudget"], 0);
        assert_eq!(config["thinkingConfig"]["includeThoughts"], false);
    }
}
