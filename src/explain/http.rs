//! HTTP implementation of [`ExplanationClient`] over reqwest.
//!
//! One `POST {base_url}/v1/explain` per call. No auth headers, no retry,
//! no idempotency key.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::explain::{ClientError, ExplainRequest, ExplainResponse, ExplanationClient};

pub const EXPLAIN_PATH: &str = "/v1/explain";

pub struct HttpExplanationClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpExplanationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, None)
    }

    /// `timeout = None` leaves the call unbounded; it resolves whenever the
    /// transport does.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build configured HTTP client ({}), using defaults", e);
            reqwest::Client::new()
        });

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, EXPLAIN_PATH)
    }
}

#[async_trait]
impl ExplanationClient for HttpExplanationClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn explain(&self, request: &ExplainRequest) -> Result<ExplainResponse, ClientError> {
        let url = self.endpoint();
        info!(
            "POST {}: report_len={}, reading_level={}",
            url,
            request.report_text.len(),
            request.reading_level.as_str()
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Explain response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;
            warn!("Explain API error: {} - {}", status.as_u16(), body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let parsed: ExplainResponse =
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))?;

        debug!(
            "Explain response fields: explanation={}, plain_language_summary={}",
            parsed.explanation.is_some(),
            parsed.plain_language_summary.is_some()
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = HttpExplanationClient::new("http://localhost:8000/");
        assert_eq!(client.endpoint(), "http://localhost:8000/v1/explain");
    }

    #[test]
    fn test_endpoint_without_trailing_slash() {
        let client = HttpExplanationClient::new("https://example.test");
        assert_eq!(client.endpoint(), "https://example.test/v1/explain");
    }

    #[test]
    fn test_timeout_client_keeps_base_url() {
        let client =
            HttpExplanationClient::with_timeout("http://h", Some(Duration::from_secs(5)));
        assert_eq!(client.endpoint(), "http://h/v1/explain");
        assert_eq!(client.name(), "http");
    }
}
