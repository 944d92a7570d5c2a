//! Test utilities for retry executor tests.
//!
//! This module provides scripted operations and recording fallback handlers.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use steadfast_core::{AuthType, BackoffSettings};
use steadfast_error::{
    FallbackError, FallbackErrorKind, GeminiError, GeminiErrorKind, SteadfastResult,
};
use steadfast_retry::FallbackHandler;
use tokio::time::Instant;

/// One scripted outcome of an operation call.
#[derive(Debug, Clone)]
pub enum Step {
    /// Fail with the given HTTP status
    Fail(u16),
    /// Fail with 429 and a server-provided retry delay
    RateLimitedFor(Duration),
    /// Fail without any status (network-level failure)
    NoStatus,
    /// Succeed with the given text
    Succeed(&'static str),
}

/// Operation that replays a script, repeating the last step when exhausted.
#[derive(Debug)]
pub struct ScriptedOperation {
    steps: Mutex<VecDeque<Step>>,
    last: Mutex<Option<Step>>,
    calls: Mutex<Vec<Instant>>,
}

impl ScriptedOperation {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            last: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Operation that always fails with `status`.
    pub fn always(status: u16) -> Self {
        Self::new(vec![Step::Fail(status)])
    }

    pub async fn call(&self) -> Result<String, GeminiError> {
        self.calls.lock().unwrap().push(Instant::now());

        let step = {
            let mut steps = self.steps.lock().unwrap();
            let mut last = self.last.lock().unwrap();
            match steps.pop_front() {
                Some(step) => {
                    *last = Some(step.clone());
                    step
                }
                None => last.clone().expect("script must not be empty"),
            }
        };

        match step {
            Step::Fail(status) => Err(GeminiError::http(status, format!("scripted {}", status))),
            Step::RateLimitedFor(delay) => Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: 429,
                message: "Resource exhausted".to_string(),
                retry_after: Some(delay),
            })),
            Step::NoStatus => Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                "connection reset".to_string(),
            ))),
            Step::Succeed(text) => Ok(text.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Time between consecutive invocations.
    pub fn gaps(&self) -> Vec<Duration> {
        let calls = self.calls.lock().unwrap();
        calls.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

/// Fallback handler that records every call and returns a canned answer.
#[derive(Debug)]
pub struct RecordingHandler {
    answer: Option<bool>,
    calls: Mutex<Vec<AuthType>>,
}

impl RecordingHandler {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Some(answer),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Handler whose every call fails.
    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<AuthType> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FallbackHandler for RecordingHandler {
    async fn on_persistent_429(&self, auth_type: AuthType) -> SteadfastResult<bool> {
        self.calls.lock().unwrap().push(auth_type);
        match self.answer {
            Some(answer) => Ok(answer),
            None => Err(FallbackError::new(FallbackErrorKind::Prompt("stdin closed".to_string())).into()),
        }
    }
}

/// Backoff settings with small delays for tests.
pub fn fast_settings(max_attempts: u32) -> BackoffSettings {
    BackoffSettings::builder()
        .max_attempts(max_attempts)
        .initial_delay_ms(100)
        .max_delay_ms(1_000)
        .build()
}

/// Assert `actual` lies within ±30% of `base`, allowing 1ms of timer rounding.
pub fn assert_within_jitter(actual: Duration, base: Duration) {
    let tolerance = Duration::from_millis(1);
    let low = base.mul_f64(0.7).saturating_sub(tolerance);
    let high = base.mul_f64(1.3) + tolerance;
    assert!(
        actual >= low && actual <= high,
        "delay {:?} outside ±30% of {:?}",
        actual,
        base
    );
}
