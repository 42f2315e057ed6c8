//! # Actions
//!
//! Everything that can happen in Lumina becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The service answers? That's `Action::Settled(outcome)`.
//!
//! `update()` takes the current state and an action, mutates the state and
//! returns an `Effect` describing the I/O the caller has to perform. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::controller;
use crate::core::state::App;
use crate::explain::{ClientError, ExplainRequest, ExplainResponse};

#[derive(Debug)]
pub enum Action {
    /// Replace the report text (editor content changed).
    EditReport(String),
    CycleReadingLevel,
    Submit,
    /// The in-flight request finished, one way or another.
    Settled(Result<ExplainResponse, ClientError>),
    DismissNotice,
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Send this request and report back with `Action::Settled`.
    SpawnRequest(ExplainRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EditReport(text) => {
            app.input.text = text;
            Effect::None
        }
        Action::CycleReadingLevel => {
            app.input.reading_level = app.input.reading_level.next();
            app.status_message = format!("Reading level: {}", app.input.reading_level.label());
            Effect::None
        }
        Action::Submit => match controller::begin(&mut app.request, &app.input) {
            Ok(request) => {
                info!(
                    "Submit accepted: report_len={}, reading_level={}",
                    request.report_text.len(),
                    request.reading_level.as_str()
                );
                app.notice = None;
                app.status_message = String::from("Explaining...");
                Effect::SpawnRequest(request)
            }
            Err(e) => {
                debug!("Submit rejected: {}", e);
                app.notice = Some(e.to_string());
                Effect::None
            }
        },
        Action::Settled(outcome) => {
            app.status_message = match &outcome {
                Ok(_) => String::from("Explanation ready"),
                Err(_) => String::from("Request failed"),
            };
            controller::settle(&mut app.request, outcome);
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::{CONNECT_ERROR_TEXT, EMPTY_REPORT_PROMPT};
    use crate::core::state::{Phase, RequestState};
    use crate::explain::ReadingLevel;
    use crate::test_support::test_app;

    #[test]
    fn test_submit_blank_sets_notice_and_stays_idle() {
        let mut app = test_app();
        app.input.text = "   ".to_string();

        let effect = update(&mut app, Action::Submit);

        assert_eq!(effect, Effect::None);
        assert_eq!(app.request.phase(), Phase::Idle);
        assert_eq!(app.notice.as_deref(), Some(EMPTY_REPORT_PROMPT));
    }

    #[test]
    fn test_submit_valid_spawns_request() {
        let mut app = test_app();
        update(&mut app, Action::EditReport("IMPRESSION: mild atelectasis".into()));
        update(&mut app, Action::CycleReadingLevel);

        let effect = update(&mut app, Action::Submit);

        assert_eq!(
            effect,
            Effect::SpawnRequest(ExplainRequest {
                report_text: "IMPRESSION: mild atelectasis".into(),
                reading_level: ReadingLevel::Advanced,
            })
        );
        assert!(app.request.is_loading());
        assert_eq!(app.request.result_text(), "");
    }

    #[test]
    fn test_settled_transitions_and_reuse() {
        let mut app = test_app();
        app.input.text = "report".into();
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::Settled(Err(ClientError::Network("refused".into()))),
        );
        assert_eq!(app.request, RequestState::Settled(CONNECT_ERROR_TEXT.into()));

        let effect = update(&mut app, Action::Submit);
        assert!(matches!(effect, Effect::SpawnRequest(_)));
        assert_eq!(app.request.phase(), Phase::Loading);
    }

    #[test]
    fn test_dismiss_notice() {
        let mut app = test_app();
        update(&mut app, Action::Submit);
        assert!(app.notice.is_some());
        update(&mut app, Action::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_cycle_reading_level_updates_status() {
        let mut app = test_app();
        update(&mut app, Action::CycleReadingLevel);
        assert_eq!(app.input.reading_level, ReadingLevel::Advanced);
        assert!(app.status_message.contains("Advanced (12th Grade)"));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
