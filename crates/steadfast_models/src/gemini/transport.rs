//! Probe transports.

use super::ProbeRequest;
use crate::GeminiResult;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use steadfast_core::ProbeSettings;
use steadfast_error::{GeminiError, GeminiErrorKind};
use tracing::{debug, instrument};

/// Sends a probe request and reports the HTTP status it received.
///
/// Implementations return `Ok(status)` for any response, successful or
/// not, and `Err` only when no response arrived.
#[async_trait]
pub trait ProbeTransport: Send + Sync {
    /// Post `request` to `model` using `api_key`.
    async fn send_probe(
        &self,
        model: &str,
        api_key: &str,
        request: &ProbeRequest,
    ) -> GeminiResult<u16>;
}

/// REST transport for the Generative Language API.
#[derive(Debug, Clone)]
pub struct HttpProbeTransport {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpProbeTransport {
    /// Creates a transport for the endpoint and timeout in `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(settings: &ProbeSettings) -> GeminiResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint().trim_end_matches('/').to_string(),
            timeout: settings.timeout(),
        })
    }

    /// Base URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProbeTransport for HttpProbeTransport {
    #[instrument(skip(self, api_key, request), fields(endpoint = %self.endpoint))]
    async fn send_probe(
        &self,
        model: &str,
        api_key: &str,
        request: &ProbeRequest,
    ) -> GeminiResult<u16> {
        let url = format!("{}/models/{}:generateContent", self.endpoint, model);
        debug!(url = %url, "Sending probe request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiError::new(GeminiErrorKind::Timeout(self.timeout.as_millis() as u64))
                } else {
                    // The URL carries the API key
                    GeminiError::new(GeminiErrorKind::ApiRequest(e.without_url().to_string()))
                }
            })?;

        let status = response.status().as_u16();
        debug!(status, "Probe response received");
        Ok(status)
    }
}
