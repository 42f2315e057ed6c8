//! One-shot mode: submit once, print the result, exit. No terminal UI.

use std::io::Write;

use log::info;

use crate::core::controller::{self, ValidationError};
use crate::core::render::ExplanationView;
use crate::core::state::{ReportInput, RequestState};
use crate::explain::ExplanationClient;

#[derive(Debug)]
pub enum HeadlessError {
    Validation(ValidationError),
    Io(std::io::Error),
}

impl std::fmt::Display for HeadlessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadlessError::Validation(e) => write!(f, "{e}"),
            HeadlessError::Io(e) => write!(f, "output error: {e}"),
        }
    }
}

impl std::error::Error for HeadlessError {}

impl From<std::io::Error> for HeadlessError {
    fn from(e: std::io::Error) -> Self {
        HeadlessError::Io(e)
    }
}

/// Runs one submission and writes the rendered result to `out`.
///
/// Any settled outcome, including server and transport errors, is written
/// as the result text and counts as success here.
pub async fn run_once(
    client: &dyn ExplanationClient,
    input: &ReportInput,
    out: &mut impl Write,
) -> Result<(), HeadlessError> {
    let mut state = RequestState::Idle;
    controller::submit(client, &mut state, input)
        .await
        .map_err(HeadlessError::Validation)?;
    info!("Headless request settled");

    if let ExplanationView::Ready(result) = ExplanationView::from_state(&state) {
        writeln!(out, "Key Takeaway")?;
        writeln!(out, "{}", result.key_takeaway)?;
        writeln!(out)?;
        writeln!(out, "Detailed Explanation")?;
        writeln!(out, "{}", result.body)?;
    }
    out.flush()?;
    Ok(())
}
