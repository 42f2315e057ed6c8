//! # Request Controller
//!
//! Validates input, issues the explain request and resolves whatever comes
//! back into a display string.
//!
//! ```text
//! Idle ──submit(valid)──▶ Loading ──(ok | http error | transport error)──▶ Settled
//!   ▲                                                                          │
//!   └── submit(blank): no transition          Settled ──submit(valid)──▶ Loading
//! ```
//!
//! The lifecycle is split into [`begin`] and [`settle`] so the TUI can keep
//! drawing while the request is in flight. [`submit`] runs both around a
//! single `.await` for headless callers.

use std::fmt;

use log::{error, info};

use crate::core::state::{ReportInput, RequestState};
use crate::explain::{ClientError, ExplainRequest, ExplainResponse, ExplanationClient};

pub const EMPTY_REPORT_PROMPT: &str = "Please paste your radiology report first";
pub const DEFAULT_SUCCESS_TEXT: &str = "Explanation generated successfully";
pub const SERVER_ERROR_PREFIX: &str = "Error: Unable to generate explanation. ";
pub const CONNECT_ERROR_TEXT: &str = "Error: Could not connect to the API. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyReport,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyReport => f.write_str(EMPTY_REPORT_PROMPT),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate and move to `Loading`. On error the state is left untouched.
pub fn begin(state: &mut RequestState, input: &ReportInput) -> Result<ExplainRequest, ValidationError> {
    if input.is_blank() {
        return Err(ValidationError::EmptyReport);
    }

    *state = RequestState::Loading;
    Ok(ExplainRequest {
        report_text: input.text.clone(),
        reading_level: input.reading_level,
    })
}

/// Resolve `outcome` and move to `Settled`. Overwrites any earlier result.
pub fn settle(state: &mut RequestState, outcome: Result<ExplainResponse, ClientError>) {
    *state = RequestState::Settled(resolve_outcome(outcome));
}

/// Turns a request outcome into the text shown in the result area.
///
/// Transport and parse failures collapse into one generic message; their
/// cause only goes to the log.
pub fn resolve_outcome(outcome: Result<ExplainResponse, ClientError>) -> String {
    match outcome {
        Ok(response) => resolve_explanation(response),
        Err(ClientError::Api { status, body }) => {
            info!("Explain request settled with HTTP {}", status);
            format!("{SERVER_ERROR_PREFIX}{body}")
        }
        Err(e @ (ClientError::Network(_) | ClientError::Parse(_))) => {
            error!("Explain request failed: {}", e);
            CONNECT_ERROR_TEXT.to_string()
        }
    }
}

// Empty strings count as missing.
fn resolve_explanation(response: ExplainResponse) -> String {
    response
        .explanation
        .filter(|s| !s.is_empty())
        .or_else(|| response.plain_language_summary.filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEFAULT_SUCCESS_TEXT.to_string())
}

/// Full lifecycle for one submission: validate, one request, settle.
pub async fn submit(
    client: &dyn ExplanationClient,
    state: &mut RequestState,
    input: &ReportInput,
) -> Result<(), ValidationError> {
    let request = begin(state, input)?;
    info!("Submitting report via {} client", client.name());
    let outcome = client.explain(&request).await;
    settle(state, outcome);
    Ok(())
}
