//! Feedback data model and response validation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoachError, Result};

/// One evaluated usage of a practiced word or phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    pub original_sentence: String,
    pub word_practiced: String,
    pub is_correct: bool,
    pub feedback: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_example: Option<String>,
}

/// Complete result of one evaluation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub summary: String,
    pub corrections: Vec<Correction>,
}

impl FeedbackResponse {
    /// Parse and validate the raw model output.
    ///
    /// Absent text, unparseable JSON and schema violations are reported as
    /// distinct errors. Nothing is repaired.
    pub fn from_response_text(text: Option<&str>) -> Result<Self> {
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(CoachError::EmptyResponse),
        };

        let value: Value = serde_json::from_str(text).map_err(CoachError::MalformedJson)?;
        let response: FeedbackResponse = serde_json::from_value(value)
            .map_err(|e| CoachError::SchemaMismatch(e.to_string()))?;
        response.validate()?;

        Ok(response)
    }

    /// Check that every correction carries its required text fields
    pub fn validate(&self) -> Result<()> {
        for (index, correction) in self.corrections.iter().enumerate() {
            let required = [
                ("originalSentence", &correction.original_sentence),
                ("wordPracticed", &correction.word_practiced),
                ("feedback", &correction.feedback),
                ("explanation", &correction.explanation),
            ];
            for (name, value) in required {
                if value.trim().is_empty() {
                    return Err(CoachError::SchemaMismatch(format!(
                        "corrections[{}].{} is empty",
                        index, name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Number of usages judged correct
    pub fn correct_count(&self) -> usize {
        self.corrections.iter().filter(|c| c.is_correct).count()
    }

    /// Usages that were judged incorrect or awkward
    pub fn needs_attention(&self) -> impl Iterator<Item = &Correction> {
        self.corrections.iter().filter(|c| !c.is_correct)
    }
}
