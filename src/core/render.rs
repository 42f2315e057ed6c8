//! # Response Renderer
//!
//! Pure transform from `RequestState` to what the result pane shows.

use crate::core::state::RequestState;

/// A settled explanation split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationResult {
    /// First line of `body`.
    pub key_takeaway: String,
    /// The full text, first line included.
    pub body: String,
}

impl ExplanationResult {
    pub fn from_text(text: &str) -> Self {
        let key_takeaway = match text.split_once('\n') {
            Some((first, _)) => first.strip_suffix('\r').unwrap_or(first),
            None => text,
        };
        Self {
            key_takeaway: key_takeaway.to_string(),
            body: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    AwaitingInput,
    InProgress,
}

impl Placeholder {
    pub fn message(&self) -> &'static str {
        match self {
            Placeholder::AwaitingInput => "Your explanation will appear here",
            Placeholder::InProgress => "AI is analyzing your report...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplanationView {
    Placeholder(Placeholder),
    Ready(ExplanationResult),
}

impl ExplanationView {
    pub fn from_state(state: &RequestState) -> Self {
        match state {
            RequestState::Idle => ExplanationView::Placeholder(Placeholder::AwaitingInput),
            RequestState::Loading => ExplanationView::Placeholder(Placeholder::InProgress),
            RequestState::Settled(text) => ExplanationView::Ready(ExplanationResult::from_text(text)),
        }
    }
}
