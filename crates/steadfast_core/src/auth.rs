//! Authentication modes.

use serde::{Deserialize, Serialize};

/// How the caller is authenticated against the generation API.
///
/// Only a personal OAuth login is eligible for the interactive model
/// fallback; metered API-key and Vertex usage is retried without it.
///
/// # Examples
///
/// ```
/// use steadfast_core::AuthType;
///
/// let auth: AuthType = "oauth-personal".parse().unwrap();
/// assert_eq!(auth, AuthType::LoginWithGoogle);
/// assert!(auth.is_oauth());
/// assert!(!AuthType::UseGemini.is_oauth());
/// assert_eq!(AuthType::UseGemini.to_string(), "gemini-api-key");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum AuthType {
    /// Personal Google account login (OAuth)
    #[serde(rename = "oauth-personal")]
    #[strum(serialize = "oauth-personal")]
    LoginWithGoogle,
    /// Gemini API key
    #[serde(rename = "gemini-api-key")]
    #[strum(serialize = "gemini-api-key")]
    UseGemini,
    /// Vertex AI credentials
    #[serde(rename = "vertex-ai")]
    #[strum(serialize = "vertex-ai")]
    UseVertexAi,
    /// Cloud Shell ambient credentials
    #[serde(rename = "cloud-shell")]
    #[strum(serialize = "cloud-shell")]
    CloudShell,
}

impl AuthType {
    /// Returns true for modes that represent a personal OAuth login.
    pub fn is_oauth(&self) -> bool {
        matches!(self, AuthType::LoginWithGoogle)
    }
}
