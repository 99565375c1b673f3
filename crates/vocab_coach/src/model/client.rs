//! Model backend for the OpenAI-compatible chat completions API

use async_openai::{
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse, ResponseFormat,
        ResponseFormatJsonSchema,
    },
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

use super::backend::{classify_provider_failure, ModelBackend};
use crate::error::{CoachError, Result};
use crate::request::{FeedbackRequest, RESPONSE_SCHEMA_NAME};

/// Environment variables consulted for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["VOCAB_COACH_API_KEY", "GEMINI_API_KEY"];

/// Configuration for the AI model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub base_url: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model_name: String,
    pub temperature: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            api_key: None,
            model_name: "gemini-3-flash-preview".to_string(),
            temperature: 1.0,
        }
    }
}

impl ModelConfig {
    /// Create a new ModelConfig with custom settings
    pub fn new(base_url: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model_name: model_name.into(),
            ..Default::default()
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Resolve the credential from the config or the process environment.
    ///
    /// Called per request so a missing key only fails the call.
    pub fn resolve_api_key(&self) -> Result<String> {
        self.resolve_api_key_with(|name| env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
        self.api_key
            .clone()
            .into_iter()
            .chain(API_KEY_ENV_VARS.iter().filter_map(|name| lookup(name)))
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .ok_or(CoachError::MissingApiKey)
    }
}

/// Backend talking to an OpenAI-compatible endpoint with structured output.
///
/// Request and response bodies use the `async-openai` types. The HTTP exchange
/// goes through `reqwest` directly so the response status is available for
/// failure classification, and so nothing is retried.
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    config: ModelConfig,
    http: reqwest::Client,
}

impl OpenAiBackend {
    /// Create a new OpenAiBackend
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the chat completion request: system + user message, JSON schema output
    pub fn build_chat_request(
        &self,
        request: &FeedbackRequest,
    ) -> std::result::Result<CreateChatCompletionRequest, OpenAIError> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(request.system_instruction.as_str())
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(request.contents.as_str())
                .build()?
                .into(),
        ];

        CreateChatCompletionRequestArgs::default()
            .model(&self.config.model_name)
            .temperature(self.config.temperature)
            .messages(messages)
            .response_format(ResponseFormat::JsonSchema {
                json_schema: ResponseFormatJsonSchema {
                    description: None,
                    name: RESPONSE_SCHEMA_NAME.to_string(),
                    schema: Some(request.response_schema.clone()),
                    strict: Some(false),
                },
            })
            .build()
    }
}

#[async_trait]
impl ModelBackend for OpenAiBackend {
    async fn generate(&self, request: &FeedbackRequest) -> Result<Option<String>> {
        let api_key = self.config.resolve_api_key()?;
        let chat_request = self
            .build_chat_request(request)
            .map_err(|e| CoachError::Provider(format!("Failed to build request: {}", e)))?;

        debug!(
            "Sending feedback request to {} (model {}, {} content bytes)",
            self.config.base_url,
            self.config.model_name,
            request.contents.len()
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| classify_provider_failure(None, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| classify_provider_failure(Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            return Err(classify_provider_failure(Some(status.as_u16()), body));
        }

        debug!("Completion received: {} bytes", body.len());

        let completion: CreateChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| CoachError::Provider(format!("Unexpected completion payload: {}", e)))?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}
