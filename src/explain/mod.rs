pub mod client;
pub mod http;
pub mod types;

pub use client::{ClientError, ExplanationClient};
pub use http::HttpExplanationClient;
pub use types::{ExplainRequest, ExplainResponse, ReadingLevel};
