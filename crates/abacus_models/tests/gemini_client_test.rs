//! Tests for the Gemini client against a local stub upstream.
//!
//! Each test binds an axum stub on an ephemeral port and points the client's
//! base URL at it, so no real credential or network access is needed.

use abacus_core::{GenerateRequest, TutorConfig, TutorConfigBuilder};
use abacus_error::GeminiErrorKind;
use abacus_models::{GeminiClient, ParamSupport};
use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

type CapturedBody = Arc<Mutex<Option<Value>>>;

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{}", addr)
}

fn stub_config(base_url: &str) -> TutorConfig {
    TutorConfigBuilder::default()
        .api_key(Some("test-key".to_string()))
        .base_url(base_url)
        .build()
        .expect("Valid TutorConfig")
}

/// Records the request body, then answers like a well-behaved upstream.
async fn capture_and_answer(
    State(captured): State<CapturedBody>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    *captured.lock().expect("captured body lock") = Some(body);
    Json(json!({
        "candidates": [{"content": {"parts": [{"text": "56"}]}}]
    }))
}

#[tokio::test]
async fn generate_returns_candidate_text() {
    let captured: CapturedBody = Arc::new(Mutex::new(None));
    let router = Router::new()
        .fallback(capture_and_answer)
        .with_state(captured.clone());
    let base_url = spawn_stub(router).await;

    let client = GeminiClient::new(&stub_config(&base_url)).expect("Valid client");
    let response = client
        .generate(&GenerateRequest::new("What is 7*8?"))
        .await
        .expect("generation succeeds");

    assert_eq!(response.answer, "56");
    assert_eq!(response.model, Some("gemini-2.5-flash".to_string()));

    let body = captured
        .lock()
        .expect("captured body lock")
        .clone()
        .expect("request body was captured");
    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .expect("prompt text");
    assert!(prompt.contains("What is 7*8?"));
    assert!(prompt.contains("math tutor"));

    let config = &body["generationConfig"];
    let temperature = config["temperature"].as_f64().expect("temperature sent");
    assert!((temperature - 0.2).abs() < 1e-6);
    assert_eq!(config["maxOutputTokens"].as_u64(), Some(512));
}

#[tokio::test]
async fn unsupported_temperature_is_omitted() {
    let captured: CapturedBody = Arc::new(Mutex::new(None));
    let router = Router::new()
        .fallback(capture_and_answer)
        .with_state(captured.clone());
    let base_url = spawn_stub(router).await;

    let client = GeminiClient::new(&stub_config(&base_url))
        .expect("Valid client")
        .with_param_support(ParamSupport {
            temperature: false,
            max_output_tokens: true,
        });

    let mut request = GenerateRequest::new("What is 7*8?");
    request.temperature = 0.9;

    let response = client.generate(&request).await.expect("generation succeeds");
    assert_eq!(response.answer, "56");

    let body = captured
        .lock()
        .expect("captured body lock")
        .clone()
        .expect("request body was captured");
    let config = body
        .get("generationConfig")
        .expect("generationConfig still present");
    assert!(config.get("temperature").is_none());
    assert_eq!(config["maxOutputTokens"].as_u64(), Some(512));
}

#[tokio::test]
async fn upstream_error_status_is_wrapped() {
    async fn unavailable() -> impl IntoResponse {
        (StatusCode::SERVICE_UNAVAILABLE, "model overloaded")
    }
    let base_url = spawn_stub(Router::new().fallback(unavailable)).await;

    let client = GeminiClient::new(&stub_config(&base_url)).expect("Valid client");
    let err = client
        .generate(&GenerateRequest::new("What is 7*8?"))
        .await
        .expect_err("upstream failure must surface");

    match err.kind {
        GeminiErrorKind::HttpError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 503);
            assert!(message.contains("model overloaded"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_upstream_is_wrapped() {
    // Nothing listens on the discard port; the send itself fails.
    let client = GeminiClient::new(&stub_config("http://127.0.0.1:9")).expect("Valid client");

    let err = client
        .generate(&GenerateRequest::new("What is 7*8?"))
        .await
        .expect_err("transport failure must surface");

    assert!(matches!(err.kind, GeminiErrorKind::ApiRequest(_)));
}

#[tokio::test]
async fn empty_question_never_reaches_the_network() {
    // An attempted call against the discard port would fail as ApiRequest;
    // the validation error proves no request was made.
    let client = GeminiClient::new(&stub_config("http://127.0.0.1:9")).expect("Valid client");

    let err = client
        .generate(&GenerateRequest::new(""))
        .await
        .expect_err("empty question must fail");

    assert_eq!(err.kind, GeminiErrorKind::EmptyQuestion);
}

#[tokio::test]
async fn missing_api_key_fails_construction() {
    let config = TutorConfigBuilder::default()
        .build()
        .expect("Valid TutorConfig");

    let err = GeminiClient::new(&config).expect_err("construction must fail");
    assert_eq!(err.kind, GeminiErrorKind::MissingApiKey);
}

#[tokio::test]
async fn unknown_response_shape_still_yields_text() {
    async fn odd_shape() -> impl IntoResponse {
        Json(json!({"modelVersion": "gemini-2.5-flash-001"}))
    }
    let base_url = spawn_stub(Router::new().fallback(odd_shape)).await;

    let client = GeminiClient::new(&stub_config(&base_url)).expect("Valid client");
    let response = client
        .generate(&GenerateRequest::new("What is 7*8?"))
        .await
        .expect("extraction never fails");

    assert!(!response.answer.is_empty());
    assert!(response.answer.contains("modelVersion"));
}
