//! A call without any credential fails before reaching the network.
//!
//! Kept in its own test binary because it clears process-wide environment
//! variables.

use httpmock::prelude::*;
use vocab_coach::{CoachError, FailureCategory, FeedbackClient, ModelConfig, API_KEY_ENV_VARS};

#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    for var in API_KEY_ENV_VARS {
        std::env::remove_var(var);
    }

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200);
        })
        .await;

    let client = FeedbackClient::new(ModelConfig::new(server.base_url(), "test-model"));
    let err = client
        .get_language_feedback("mitigate", "I tried to mitigate the fire by pouring water.")
        .await
        .unwrap_err();

    assert!(matches!(err, CoachError::MissingApiKey), "got {:?}", err);
    assert_eq!(err.category(), FailureCategory::Unclassified);
    mock.assert_calls_async(0).await;
}
