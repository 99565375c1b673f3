//! End-to-end tests of the feedback client against a mock OpenAI-compatible endpoint

use httpmock::prelude::*;
use serde_json::{json, Value};
use vocab_coach::{CoachError, FailureCategory, FeedbackClient, ModelConfig};

const WORDS: &str = "mitigate";
const SENTENCES: &str = "I tried to mitigate the fire by pouring water.";

fn feedback_body() -> Value {
    json!({
        "summary": "Dobrá práca!",
        "corrections": [{
            "originalSentence": SENTENCES,
            "wordPracticed": WORDS,
            "isCorrect": false,
            "feedback": "...",
            "explanation": "...",
            "suggestion": "extinguish"
        }]
    })
}

fn completion(content: Value) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000u32,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

fn client_for(server: &MockServer) -> FeedbackClient {
    FeedbackClient::new(ModelConfig::new(server.base_url(), "test-model").with_api_key("test-key"))
}

#[tokio::test]
async fn test_successful_round_trip() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer test-key");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(completion(Value::String(feedback_body().to_string())));
        })
        .await;

    let response = client_for(&server)
        .get_language_feedback(WORDS, SENTENCES)
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&response).unwrap(), feedback_body());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rate_limit_is_service_busy_without_retry() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429)
                .header("content-type", "application/json")
                .json_body(json!({
                    "error": {
                        "message": "Resource has been exhausted (e.g. check quota).",
                        "type": "rate_limit_exceeded",
                        "param": null,
                        "code": "429"
                    }
                }));
        })
        .await;

    let err = client_for(&server)
        .get_language_feedback(WORDS, SENTENCES)
        .await
        .unwrap_err();

    assert!(matches!(err, CoachError::RateLimited(_)), "got {:?}", err);
    assert_eq!(err.category(), FailureCategory::ServiceBusy);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_auth_failure_is_unclassified() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({
                    "error": {
                        "message": "API key not valid. Please pass a valid API key.",
                        "type": "invalid_request_error",
                        "param": null,
                        "code": "invalid_api_key"
                    }
                }));
        })
        .await;

    let err = client_for(&server)
        .get_language_feedback(WORDS, SENTENCES)
        .await
        .unwrap_err();

    assert!(matches!(err, CoachError::Provider(_)), "got {:?}", err);
    assert_eq!(err.category(), FailureCategory::Unclassified);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_content_is_unclassified() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(completion(Value::Null));
        })
        .await;

    let err = client_for(&server)
        .get_language_feedback(WORDS, SENTENCES)
        .await
        .unwrap_err();

    assert!(matches!(err, CoachError::EmptyResponse), "got {:?}", err);
    assert_eq!(err.category(), FailureCategory::Unclassified);
}

#[tokio::test]
async fn test_non_json_content_is_unclassified() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(completion(json!("Here is your feedback: great job!")));
        })
        .await;

    let err = client_for(&server)
        .get_language_feedback(WORDS, SENTENCES)
        .await
        .unwrap_err();

    assert!(matches!(err, CoachError::MalformedJson(_)), "got {:?}", err);
    assert_eq!(err.category(), FailureCategory::Unclassified);
}

#[tokio::test]
async fn test_unreachable_service_is_unclassified() {
    let client =
        FeedbackClient::new(ModelConfig::new("http://127.0.0.1:1", "test-model").with_api_key("k"));

    let err = client
        .get_language_feedback(WORDS, SENTENCES)
        .await
        .unwrap_err();

    assert_eq!(err.category(), FailureCategory::Unclassified);
}

/// Serve one raw error response and return the classified failure
async fn failure_for(status: u16, content_type: &str, body: &str) -> CoachError {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(status)
                .header("content-type", content_type)
                .body(body);
        })
        .await;

    let err = client_for(&server)
        .get_language_feedback(WORDS, SENTENCES)
        .await
        .unwrap_err();

    mock.assert_calls_async(1).await;
    err
}

#[tokio::test]
async fn test_rate_limit_with_gemini_error_array() {
    let err = failure_for(
        429,
        "application/json",
        r#"[{"error":{"code":429,"message":"Resource has been exhausted (e.g. check quota).","status":"RESOURCE_EXHAUSTED"}}]"#,
    )
    .await;

    assert!(matches!(err, CoachError::RateLimited(_)), "got {:?}", err);
    assert_eq!(err.category(), FailureCategory::ServiceBusy);
}

#[tokio::test]
async fn test_rate_limit_with_plain_text_body() {
    let err = failure_for(429, "text/plain", "Too Many Requests").await;
    assert_eq!(err.category(), FailureCategory::ServiceBusy);
}

#[tokio::test]
async fn test_rate_limit_status_without_marker_text() {
    let err = failure_for(
        429,
        "application/json",
        r#"{"error":{"message":"slow down","type":null,"param":null,"code":null}}"#,
    )
    .await;

    assert!(matches!(err, CoachError::RateLimited(_)), "got {:?}", err);
    assert_eq!(err.category(), FailureCategory::ServiceBusy);
}

#[tokio::test]
async fn test_empty_service_unavailable_is_service_busy() {
    let err = failure_for(503, "text/plain", "").await;
    assert_eq!(err.category(), FailureCategory::ServiceBusy);
}

#[tokio::test]
async fn test_client_errors_ignore_marker_words() {
    let err = failure_for(
        404,
        "application/json",
        r#"{"error":{"message":"models/test-model is unavailable","type":"not_found","param":null,"code":null}}"#,
    )
    .await;
    assert!(matches!(err, CoachError::Provider(_)), "got {:?}", err);
    assert_eq!(err.category(), FailureCategory::Unclassified);

    let err = failure_for(403, "text/plain", "Project has no quota for this model").await;
    assert!(matches!(err, CoachError::Provider(_)), "got {:?}", err);
    assert_eq!(err.category(), FailureCategory::Unclassified);
}
