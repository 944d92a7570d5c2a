//! Test utilities for model probe and fallback tests.
//!
//! This module provides mock transports, scripted operators and a tiny
//! HTTP server for exercising the reqwest transport.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use steadfast_error::{FallbackError, FallbackErrorKind, GeminiError, GeminiErrorKind};
use steadfast_models::{GeminiResult, Operator, ProbeRequest, ProbeTransport};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// How the mock transport responds.
#[derive(Debug, Clone, Copy)]
pub enum TransportBehavior {
    /// Return this HTTP status
    Status(u16),
    /// Fail before any response arrives
    Fail,
    /// Never respond
    Hang,
}

/// Mock probe transport that records every call.
#[derive(Debug)]
pub struct MockTransport {
    behavior: TransportBehavior,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockTransport {
    pub fn new(behavior: TransportBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// (model, api_key) of each call.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProbeTransport for MockTransport {
    async fn send_probe(
        &self,
        model: &str,
        api_key: &str,
        _request: &ProbeRequest,
    ) -> GeminiResult<u16> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), api_key.to_string()));

        match self.behavior {
            TransportBehavior::Status(status) => Ok(status),
            TransportBehavior::Fail => Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                "connection refused".to_string(),
            ))),
            TransportBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(200)
            }
        }
    }
}

/// Operator with a canned answer that records questions and notices.
#[derive(Debug)]
pub struct ScriptedOperator {
    answer: Option<bool>,
    questions: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
}

impl ScriptedOperator {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer: Some(answer),
            questions: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
        }
    }

    /// Operator whose prompt always fails.
    pub fn unreachable() -> Self {
        Self {
            answer: None,
            questions: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl Operator for ScriptedOperator {
    async fn confirm(&self, question: &str) -> Result<bool, FallbackError> {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer.ok_or_else(|| {
            FallbackError::new(FallbackErrorKind::Prompt("stdin closed".to_string()))
        })
    }

    async fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

/// Serve one connection, replying with `status_line` and returning the raw
/// request text from the join handle.
pub async fn serve_once(status_line: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
            status_line
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        request
    });

    (format!("http://{}/v1beta", addr), handle)
}

/// Accept one connection and never answer it.
pub async fn serve_silence() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        drop(stream);
    });

    (format!("http://{}/v1beta", addr), handle)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
