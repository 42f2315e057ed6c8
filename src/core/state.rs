//! # Application State
//!
//! Core business state for Lumina. Domain logic only; presentation state
//! (scroll offsets, cursor, overlays) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── input: ReportInput          // report text + reading level
//! ├── request: RequestState       // idle / loading / settled(text)
//! ├── status_message: String      // title bar text
//! └── notice: Option<String>      // blocking notice (validation prompt)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::explain::ReadingLevel;

/// What the user has typed and picked. No validation happens here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportInput {
    pub text: String,
    pub reading_level: ReadingLevel,
}

impl ReportInput {
    pub fn new(text: impl Into<String>, reading_level: ReadingLevel) -> Self {
        Self {
            text: text.into(),
            reading_level,
        }
    }

    /// True when there is nothing but whitespace to submit.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Settled,
}

/// Lifecycle of the current submission.
///
/// `Settled` always carries a non-empty display string: either the
/// explanation or a formatted error.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Settled(String),
}

impl RequestState {
    pub fn phase(&self) -> Phase {
        match self {
            RequestState::Idle => Phase::Idle,
            RequestState::Loading => Phase::Loading,
            RequestState::Settled(_) => Phase::Settled,
        }
    }

    /// The resolved display text, or `""` while idle or loading.
    pub fn result_text(&self) -> &str {
        match self {
            RequestState::Settled(text) => text,
            _ => "",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

pub struct App {
    pub input: ReportInput,
    pub request: RequestState,
    pub status_message: String,
    /// Blocking notice. While set, the TUI shows a modal and swallows input.
    pub notice: Option<String>,
}

impl App {
    pub fn new(reading_level: ReadingLevel) -> Self {
        Self {
            input: ReportInput::new(String::new(), reading_level),
            request: RequestState::Idle,
            status_message: String::from("Understanding your radiology report, simplified"),
            notice: None,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.reading_level)
    }
}
