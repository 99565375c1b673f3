//! Request construction for feedback evaluation

use lazy_static::lazy_static;
use serde_json::{json, Value};

use crate::config::TutorProfile;

/// Name under which the response schema is declared to the provider
pub const RESPONSE_SCHEMA_NAME: &str = "feedback_response";

lazy_static! {
    /// JSON schema the model response must follow
    pub static ref FEEDBACK_SCHEMA: Value = json!({
        "type": "object",
        "properties": {
            "summary": {
                "type": "string",
                "description": "A short, encouraging summary of the student's attempt in Slovak (informal, feminine)."
            },
            "corrections": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "originalSentence": { "type": "string" },
                        "wordPracticed": { "type": "string" },
                        "isCorrect": { "type": "boolean" },
                        "feedback": {
                            "type": "string",
                            "description": "Detailed feedback in Slovak (informal, feminine)."
                        },
                        "explanation": {
                            "type": "string",
                            "description": "Detailed linguistic explanation in Slovak (informal, feminine)."
                        },
                        "suggestion": {
                            "type": "string",
                            "description": "Improved version or alternative word."
                        },
                        "correctExample": {
                            "type": "string",
                            "description": "A separate example showing correct usage of the target word."
                        }
                    },
                    "required": ["originalSentence", "wordPracticed", "isCorrect", "feedback", "explanation"]
                }
            }
        },
        "required": ["summary", "corrections"]
    });
}

/// A fully built request for the model service
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRequest {
    /// User content with both inputs embedded verbatim
    pub contents: String,
    pub system_instruction: String,
    pub response_schema: Value,
}

/// Builds [`FeedbackRequest`]s from raw learner input
#[derive(Debug, Clone, Default)]
pub struct FeedbackRequestBuilder {
    profile: TutorProfile,
    system_instruction: Option<String>,
}

impl FeedbackRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tutor profile rendered into the instruction template
    pub fn with_profile(mut self, profile: TutorProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Replace the templated instruction with a custom one
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Get the system instruction (custom or rendered from the profile)
    pub fn system_instruction(&self) -> String {
        self.system_instruction
            .clone()
            .unwrap_or_else(|| self.profile.system_instruction())
    }

    /// Compose the request. Inputs are forwarded as-is, no validation happens here.
    pub fn build(&self, target_words: &str, user_sentences: &str) -> FeedbackRequest {
        FeedbackRequest {
            contents: format!(
                "Vocabulary to practice: {}\nSentences provided: {}",
                target_words, user_sentences
            ),
            system_instruction: self.system_instruction(),
            response_schema: FEEDBACK_SCHEMA.clone(),
        }
    }
}

/// Build a request with the default tutor profile
pub fn build_request(target_words: &str, user_sentences: &str) -> FeedbackRequest {
    FeedbackRequestBuilder::new().build(target_words, user_sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_embed_inputs_verbatim() {
        let request = build_request(
            "mitigate",
            "I tried to mitigate the fire by pouring water.",
        );
        assert!(request.contents.contains("Vocabulary to practice: mitigate"));
        assert!(request
            .contents
            .contains("Sentences provided: I tried to mitigate the fire by pouring water."));
    }

    #[test]
    fn test_garbage_is_forwarded() {
        let request = build_request("  \"}{  ", "");
        assert!(request.contents.contains("  \"}{  "));
    }

    #[test]
    fn test_schema_required_fields() {
        let request = build_request("a", "b");
        let schema = &request.response_schema;
        assert_eq!(schema["required"], json!(["summary", "corrections"]));

        let item = &schema["properties"]["corrections"]["items"];
        assert_eq!(
            item["required"],
            json!(["originalSentence", "wordPracticed", "isCorrect", "feedback", "explanation"])
        );
        assert_eq!(item["properties"]["isCorrect"]["type"], "boolean");
        assert!(item["properties"].get("suggestion").is_some());
        assert!(item["properties"].get("correctExample").is_some());
    }

    #[test]
    fn test_custom_instruction_overrides_profile() {
        let builder = FeedbackRequestBuilder::new().with_system_instruction("Be brief.");
        assert_eq!(builder.build("a", "b").system_instruction, "Be brief.");
    }

    #[test]
    fn test_default_instruction_uses_profile() {
        let request = build_request("a", "b");
        assert!(request.system_instruction.contains("encouraging and context-aware"));
        assert!(request.system_instruction.contains("INFORMAL, SINGULAR"));
    }
}
