//! Google Gemini effective-model probe.
//!
//! This module provides:
//! - [`ProbeRequest`] - the minimal `generateContent` body used for probing
//! - [`ProbeTransport`] - how the probe reaches the API
//! - [`HttpProbeTransport`] - REST transport built on `reqwest`
//! - [`EffectiveModelProbe`] - decides which model a session should start with

mod probe;
mod protocol;
mod transport;

pub use probe::{EffectiveModel, EffectiveModelProbe, get_effective_model};
pub use protocol::{GenerationConfig, ProbeContent, ProbePart, ProbeRequest, ThinkingConfig};
pub use transport::{HttpProbeTransport, ProbeTransport};
