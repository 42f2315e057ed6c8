use std::fmt;

use async_trait::async_trait;

use super::types::{ExplainRequest, ExplainResponse};

/// Errors that can occur while talking to the explanation service.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// No response was obtained (DNS, connection refused, reset, TLS).
    Network(String),
    /// The service answered with a non-success status. `body` is the raw
    /// response text, shown to the user verbatim.
    Api { status: u16, body: String },
    /// A success status arrived but the body was not the expected JSON.
    Parse(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "network error: {msg}"),
            ClientError::Api { status, body } => write!(f, "API error (HTTP {status}): {body}"),
            ClientError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

#[async_trait]
pub trait ExplanationClient: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Issues exactly one request. Implementations must not retry.
    async fn explain(&self, request: &ExplainRequest) -> Result<ExplainResponse, ClientError>;
}
