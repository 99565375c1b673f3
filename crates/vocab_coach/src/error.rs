//! Error types for feedback requests

use thiserror::Error;

use crate::config::{get_message, Language};

/// Input field checked before a request is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    TargetWords,
    UserSentences,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::TargetWords => write!(f, "target words"),
            InputField::UserSentences => write!(f, "sentences"),
        }
    }
}

/// How a failure is presented to the learner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// A required field was left empty; no call was made
    InvalidInput,
    /// The provider is rate limiting or overloaded
    ServiceBusy,
    /// Anything else: network, missing or malformed response, configuration
    Unclassified,
}

impl FailureCategory {
    /// Message id in the i18n tables
    pub fn message_key(&self) -> &'static str {
        match self {
            FailureCategory::InvalidInput => "fill_both_fields",
            FailureCategory::ServiceBusy => "service_busy",
            FailureCategory::Unclassified => "generic_error",
        }
    }

    /// Text shown to the learner for this category
    pub fn user_message(&self, lang: Language) -> String {
        get_message(self.message_key(), lang)
    }
}

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("Required field is empty: {field}")]
    EmptyInput { field: InputField },

    #[error("A feedback request is already in flight")]
    Busy,

    #[error("No API key configured (set VOCAB_COACH_API_KEY or GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("Provider is rate limiting or overloaded: {0}")]
    RateLimited(String),

    #[error("Provider request failed: {0}")]
    Provider(String),

    #[error("No feedback received from the model")]
    EmptyResponse,

    #[error("Response is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Response does not match the feedback schema: {0}")]
    SchemaMismatch(String),
}

impl CoachError {
    /// Map the error to the category used for user-facing messages
    pub fn category(&self) -> FailureCategory {
        match self {
            CoachError::EmptyInput { .. } => FailureCategory::InvalidInput,
            CoachError::RateLimited(_) => FailureCategory::ServiceBusy,
            _ => FailureCategory::Unclassified,
        }
    }

    pub fn is_transient(&self) -> bool {
        self.category() == FailureCategory::ServiceBusy
    }
}

pub type Result<T> = std::result::Result<T, CoachError>;
