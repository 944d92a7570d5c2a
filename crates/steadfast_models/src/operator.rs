//! Operator interaction for fallback prompts.

use async_trait::async_trait;
use std::io::{BufRead, Write};
use steadfast_error::{FallbackError, FallbackErrorKind};
use tracing::{debug, info};

/// Whoever answers the "switch to the fallback model?" question.
///
/// `confirm` returns `Ok(false)` for any answer that is not an explicit yes.
/// An `Err` means the operator could not be asked at all.
#[async_trait]
pub trait Operator: Send + Sync {
    /// Ask a yes/no question.
    async fn confirm(&self, question: &str) -> Result<bool, FallbackError>;

    /// Show an informational notice.
    async fn notify(&self, message: &str);
}

/// Returns true for a case-insensitive `y`, ignoring surrounding whitespace.
///
/// The spelled-out `yes` is accepted as well. Anything else, including
/// empty input, declines.
///
/// # Examples
///
/// ```
/// use steadfast_models::is_affirmative;
///
/// assert!(is_affirmative("Y\n"));
/// assert!(is_affirmative("  yes "));
/// assert!(!is_affirmative(""));
/// assert!(!is_affirmative("yep"));
/// ```
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Interactive operator on the terminal.
///
/// Questions and notices go to stderr so stdout stays clean for command
/// output. Empty input and end-of-file decline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOperator;

#[async_trait]
impl Operator for ConsoleOperator {
    async fn confirm(&self, question: &str) -> Result<bool, FallbackError> {
        let prompt = format!("{} [y/N] ", question);

        let answer = tokio::task::spawn_blocking(move || -> std::io::Result<Option<String>> {
            let mut stderr = std::io::stderr();
            write!(stderr, "{}", prompt)?;
            stderr.flush()?;

            let mut line = String::new();
            let read = std::io::stdin().lock().read_line(&mut line)?;
            Ok((read > 0).then_some(line))
        })
        .await
        .map_err(|e| FallbackError::new(FallbackErrorKind::Prompt(e.to_string())))?
        .map_err(|e| FallbackError::new(FallbackErrorKind::Prompt(e.to_string())))?;

        match answer {
            Some(line) => Ok(is_affirmative(&line)),
            None => {
                debug!("Standard input closed, declining");
                Ok(false)
            }
        }
    }

    async fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Non-interactive operator that gives the same answer to every question.
///
/// Notices are logged at `info` instead of printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAnswer(pub bool);

#[async_trait]
impl Operator for AutoAnswer {
    async fn confirm(&self, question: &str) -> Result<bool, FallbackError> {
        debug!(question, answer = self.0, "Answering automatically");
        Ok(self.0)
    }

    async fn notify(&self, message: &str) {
        info!("{}", message);
    }
}
