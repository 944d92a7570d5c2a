//! Gemini model probing and in-session model fallback.
//!
//! This crate provides the pieces that let a session degrade from the
//! default "pro" model to the lighter flash model when the former is
//! rate-limited:
//!
//! - [`EffectiveModelProbe`] - sends one minimal request before a session
//!   starts and offers the fallback on HTTP 429
//! - [`FlashFallbackHandler`] - a [`FallbackHandler`] for the retry executor
//!   that offers the same switch mid-session
//! - [`ModelSession`] - the shared, in-memory record of the active model
//! - [`Operator`] - whoever answers the fallback prompt
//!
//! [`FallbackHandler`]: steadfast_retry::FallbackHandler

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fallback;
mod gemini;
mod operator;
mod session;

pub use fallback::FlashFallbackHandler;
pub use gemini::{
    EffectiveModel, EffectiveModelProbe, GenerationConfig, HttpProbeTransport, ProbeContent,
    ProbePart, ProbeRequest, ProbeTransport, ThinkingConfig, get_effective_model,
};
pub use operator::{AutoAnswer, ConsoleOperator, Operator, is_affirmative};
pub use session::ModelSession;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, steadfast_error::GeminiError>;
