//! Errors raised by model fallback handlers.

/// Fallback handler failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FallbackErrorKind {
    /// The operator could not be asked (closed stdin, terminal error)
    #[display("Operator prompt failed: {}", _0)]
    Prompt(String),
    /// The session model could not be switched
    #[display("Model switch failed: {}", _0)]
    Switch(String),
}

/// Fallback handler error with location tracking.
///
/// The retry executor swallows these: a failing handler is treated the same
/// as a declined fallback and never replaces the underlying API error.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fallback Error: {} at line {} in {}", kind, line, file)]
pub struct FallbackError {
    kind: FallbackErrorKind,
    line: u32,
    file: &'static str,
}

impl FallbackError {
    /// Create a new fallback error with caller location tracking.
    #[track_caller]
    pub fn new(kind: FallbackErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FallbackErrorKind {
        &self.kind
    }
}
