//! vocab_coach: AI tutoring feedback for vocabulary practice
//!
//! This library provides:
//! - Request construction: prompt, tutor instruction and output schema
//! - A feedback client performing one model round trip per evaluation
//! - Response parsing with schema validation
//! - Error classification for user-facing messages
//! - A practice session with an in-flight guard and a latest-result slot
//!
//! # Example
//!
//! ```no_run
//! use vocab_coach::{FeedbackClient, ModelConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = FeedbackClient::new(ModelConfig::default().with_api_key("your-key"));
//!
//!     let result = client
//!         .get_language_feedback("mitigate", "I tried to mitigate the fire by pouring water.")
//!         .await;
//!     println!("Result: {:?}", result);
//! }
//! ```

// Core modules
pub mod error;

// Configuration module
pub mod config;

// Core functionality
pub mod feedback;
pub mod feedback_client;
pub mod model;
pub mod request;
pub mod session;

// Re-export commonly used types and functions
pub use error::{CoachError, FailureCategory, InputField, Result};

// Config re-exports
pub use config::{
    get_message, get_messages, Language, TutorProfile, MESSAGES_EN, MESSAGES_SK,
    SYSTEM_INSTRUCTION_TEMPLATE,
};

// Request re-exports
pub use request::{
    build_request, FeedbackRequest, FeedbackRequestBuilder, FEEDBACK_SCHEMA, RESPONSE_SCHEMA_NAME,
};

// Feedback re-exports
pub use feedback::{Correction, FeedbackResponse};
pub use feedback_client::FeedbackClient;

// Model re-exports
pub use model::{
    classify_provider_failure, is_rate_limit_marker, ModelBackend, ModelConfig, OpenAiBackend,
    API_KEY_ENV_VARS, RATE_LIMIT_STATUSES,
};

// Session re-exports
pub use session::{validate_input, Evaluation, PracticeInput, PracticeSession};
