//! Well-known Gemini model identifiers.

/// The default "pro" tier model. Only this model is probed for rate limiting.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";

/// The lighter model offered when the default model is rate-limited.
pub const DEFAULT_GEMINI_FLASH_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the Generative Language REST API.
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
