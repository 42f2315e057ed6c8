use lumina::ReadingLevel;
use lumina::core::controller::{
    CONNECT_ERROR_TEXT, DEFAULT_SUCCESS_TEXT, EMPTY_REPORT_PROMPT, submit,
};
use lumina::core::render::ExplanationView;
use lumina::core::state::{Phase, ReportInput, RequestState};
use lumina::explain::{
    ClientError, ExplainRequest, ExplanationClient, HttpExplanationClient,
};
use lumina::headless::run_once;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn input(text: &str, level: ReadingLevel) -> ReportInput {
    ReportInput::new(text, level)
}

/// Runs one full submit against `base_url` and returns the settled text.
async fn settle_against(base_url: &str, report: &str) -> String {
    let client = HttpExplanationClient::new(base_url);
    let mut state = RequestState::Idle;
    submit(&client, &mut state, &input(report, ReadingLevel::Intermediate))
        .await
        .expect("non-blank report should validate");
    assert_eq!(state.phase(), Phase::Settled);
    state.result_text().to_string()
}

/// A base URL nothing is listening on.
async fn dead_base_url() -> String {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);
    uri
}

// ============================================================================
// HTTP Client Tests
// ============================================================================

#[tokio::test]
async fn test_client_posts_json_body_to_explain_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "report_text": "IMPRESSION: Mild cardiomegaly.",
            "reading_level": "basic"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explanation": "Your heart is a little bigger than usual."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpExplanationClient::new(mock_server.uri());
    let response = client
        .explain(&ExplainRequest {
            report_text: "IMPRESSION: Mild cardiomegaly.".into(),
            reading_level: ReadingLevel::Basic,
        })
        .await
        .unwrap();

    assert_eq!(
        response.explanation.as_deref(),
        Some("Your heart is a little bigger than usual.")
    );
    assert_eq!(response.plain_language_summary, None);
}

#[tokio::test]
async fn test_client_trailing_slash_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpExplanationClient::new(format!("{}/", mock_server.uri()));
    let response = client
        .explain(&ExplainRequest {
            report_text: "x".into(),
            reading_level: ReadingLevel::Advanced,
        })
        .await
        .unwrap();
    assert_eq!(response.explanation, None);
}

#[tokio::test]
async fn test_client_non_success_status_carries_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .respond_with(ResponseTemplate::new(422).set_body_string("Bad model input"))
        .mount(&mock_server)
        .await;

    let client = HttpExplanationClient::new(mock_server.uri());
    let err = client
        .explain(&ExplainRequest {
            report_text: "x".into(),
            reading_level: ReadingLevel::Intermediate,
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::Api {
            status: 422,
            body: "Bad model input".into()
        }
    );
}

#[tokio::test]
async fn test_client_invalid_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = HttpExplanationClient::new(mock_server.uri());
    let err = client
        .explain(&ExplainRequest {
            report_text: "x".into(),
            reading_level: ReadingLevel::Intermediate,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn test_client_connection_refused_is_network_error() {
    let client = HttpExplanationClient::new(dead_base_url().await);
    let err = client
        .explain(&ExplainRequest {
            report_text: "x".into(),
            reading_level: ReadingLevel::Intermediate,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}

// ============================================================================
// Submit Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_submit_prefers_explanation_over_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explanation": "Line1\nLine2",
            "plain_language_summary": "ignored"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = settle_against(&mock_server.uri(), "FINDINGS: ok").await;
    assert_eq!(text, "Line1\nLine2");
}

#[tokio::test]
async fn test_submit_falls_back_to_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plain_language_summary": "Summary only"
        })))
        .mount(&mock_server)
        .await;

    let text = settle_against(&mock_server.uri(), "FINDINGS: ok").await;
    assert_eq!(text, "Summary only");
}

#[tokio::test]
async fn test_submit_without_fields_uses_default_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "other": 1 })))
        .mount(&mock_server)
        .await;

    let text = settle_against(&mock_server.uri(), "FINDINGS: ok").await;
    assert_eq!(text, DEFAULT_SUCCESS_TEXT);

    // Single-line result: takeaway and body are the same
    let view = ExplanationView::from_state(&RequestState::Settled(text));
    match view {
        ExplanationView::Ready(result) => {
            assert_eq!(result.key_takeaway, DEFAULT_SUCCESS_TEXT);
            assert_eq!(result.body, DEFAULT_SUCCESS_TEXT);
        }
        other => panic!("expected Ready, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_server_error_embeds_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .respond_with(ResponseTemplate::new(422).set_body_string("Bad model input"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = settle_against(&mock_server.uri(), "FINDINGS: ok").await;
    assert_eq!(text, "Error: Unable to generate explanation. Bad model input");
}

#[tokio::test]
async fn test_submit_non_json_success_shows_connect_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let text = settle_against(&mock_server.uri(), "FINDINGS: ok").await;
    assert_eq!(text, CONNECT_ERROR_TEXT);
}

#[tokio::test]
async fn test_submit_unreachable_service_shows_connect_message() {
    let text = settle_against(&dead_base_url().await, "FINDINGS: ok").await;
    assert_eq!(text, CONNECT_ERROR_TEXT);
}

#[tokio::test]
async fn test_blank_submit_never_reaches_service() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = HttpExplanationClient::new(mock_server.uri());
    let mut state = RequestState::Idle;
    let err = submit(&client, &mut state, &input("   \n\t ", ReadingLevel::Basic))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), EMPTY_REPORT_PROMPT);
    assert_eq!(state, RequestState::Idle);
}

#[tokio::test]
async fn test_resubmit_overwrites_previous_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .and(body_json(json!({ "report_text": "first", "reading_level": "intermediate" })))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .and(body_json(json!({ "report_text": "second", "reading_level": "advanced" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "explanation": "Fine" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpExplanationClient::new(mock_server.uri());
    let mut state = RequestState::Idle;

    submit(&client, &mut state, &input("first", ReadingLevel::Intermediate))
        .await
        .unwrap();
    assert_eq!(state.result_text(), "Error: Unable to generate explanation. boom");

    submit(&client, &mut state, &input("second", ReadingLevel::Advanced))
        .await
        .unwrap();
    assert_eq!(state.result_text(), "Fine");
}

// ============================================================================
// Headless Mode Tests
// ============================================================================

#[tokio::test]
async fn test_headless_prints_sections() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/explain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explanation": "No broken bones.\nThe X-ray of your wrist is normal."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpExplanationClient::new(mock_server.uri());
    let mut out = Vec::new();
    run_once(&client, &input("XR WRIST", ReadingLevel::Basic), &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Key Takeaway\nNo broken bones.\n\nDetailed Explanation\n"));
    assert!(text.contains("The X-ray of your wrist is normal."));
}
