//! Feedback client: one model round trip per evaluation

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::Result;
use crate::feedback::FeedbackResponse;
use crate::model::{ModelBackend, ModelConfig, OpenAiBackend};
use crate::request::{FeedbackRequest, FeedbackRequestBuilder};

/// Client that turns a [`FeedbackRequest`] into a validated [`FeedbackResponse`]
///
/// Every call is independent: no retry, no caching, no shared state between
/// calls beyond the backend itself.
pub struct FeedbackClient<B: ModelBackend = OpenAiBackend> {
    backend: B,
    builder: FeedbackRequestBuilder,
}

impl FeedbackClient<OpenAiBackend> {
    /// Create a client backed by the OpenAI-compatible model service
    pub fn new(config: ModelConfig) -> Self {
        Self::with_backend(OpenAiBackend::new(config))
    }
}

impl<B: ModelBackend> FeedbackClient<B> {
    /// Create a client over any model backend
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            builder: FeedbackRequestBuilder::new(),
        }
    }

    /// Use a custom request builder (tutor profile or instruction)
    pub fn with_request_builder(mut self, builder: FeedbackRequestBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Send a prepared request and validate the response
    pub async fn get_feedback(&self, request: &FeedbackRequest) -> Result<FeedbackResponse> {
        let request_id = Uuid::new_v4();
        let span = info_span!("feedback_request", %request_id);

        async {
            let result = self
                .backend
                .generate(request)
                .await
                .and_then(|text| FeedbackResponse::from_response_text(text.as_deref()));

            match &result {
                Ok(response) => info!(
                    "Feedback received: {} corrections, {} correct",
                    response.corrections.len(),
                    response.correct_count()
                ),
                Err(e) => warn!(category = ?e.category(), "Feedback request failed: {}", e),
            }

            result
        }
        .instrument(span)
        .await
    }

    /// Build a request from raw input and send it
    pub async fn get_language_feedback(
        &self,
        target_words: &str,
        user_sentences: &str,
    ) -> Result<FeedbackResponse> {
        let request = self.builder.build(target_words, user_sentences);
        self.get_feedback(&request).await
    }
}
