use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How technical the generated explanation should be.
///
/// Interpreted entirely by the explanation service; the client only carries
/// the value on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReadingLevel {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

impl ReadingLevel {
    /// Human label shown in the level selector.
    pub fn label(&self) -> &'static str {
        match self {
            ReadingLevel::Basic => "Basic (5th-6th Grade)",
            ReadingLevel::Intermediate => "Intermediate (8th Grade)",
            ReadingLevel::Advanced => "Advanced (12th Grade)",
        }
    }

    /// Wire value, as sent in `reading_level`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingLevel::Basic => "basic",
            ReadingLevel::Intermediate => "intermediate",
            ReadingLevel::Advanced => "advanced",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ReadingLevel::Basic => ReadingLevel::Intermediate,
            ReadingLevel::Intermediate => ReadingLevel::Advanced,
            ReadingLevel::Advanced => ReadingLevel::Basic,
        }
    }
}

/// Body of `POST /v1/explain`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExplainRequest {
    pub report_text: String,
    pub reading_level: ReadingLevel,
}

/// Successful response body. Both fields are optional; the service has
/// shipped each of them at different times.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExplainResponse {
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub plain_language_summary: Option<String>,
}
