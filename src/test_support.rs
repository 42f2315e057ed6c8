//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::explain::{ClientError, ExplainRequest, ExplainResponse, ExplanationClient};

/// A client that answers every call with a preset outcome and counts calls.
pub struct ScriptedClient {
    outcome: Mutex<Result<ExplainResponse, ClientError>>,
    calls: AtomicUsize,
    last_request: Mutex<Option<ExplainRequest>>,
}

impl ScriptedClient {
    pub fn new(outcome: Result<ExplainResponse, ClientError>) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn set_outcome(&self, outcome: Result<ExplainResponse, ClientError>) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ExplainRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExplanationClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn explain(&self, request: &ExplainRequest) -> Result<ExplainResponse, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.outcome.lock().unwrap().clone()
    }
}

/// Creates a test App at the default reading level.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(crate::explain::ReadingLevel::default())
}
