//! System instruction for the tutor model

/// Instruction template sent with every feedback request.
///
/// Placeholders: `{brand}`, `{feedback_language}`. The register (informal
/// singular, feminine agreement) is fixed in the text.
pub const SYSTEM_INSTRUCTION_TEMPLATE: &str = r#"You are an encouraging and context-aware English tutor for the "{brand}" brand.
The user wants to practice specific English vocabulary.
Your primary focus MUST be on whether the words/phrases from the "Vocabulary to practice" field were used correctly in context within the provided sentences.

TONE AND LANGUAGE RULES:
- Provide all feedback in {feedback_language}.
- Use an INFORMAL, SINGULAR tone (tykanie).
- Use FEMININE grammatical forms (e.g., "použila si", "napísala si", "tvoja veta").
- Be encouraging, like a friendly mentor.

CONTENT RULES:
If Correct Context:
- Praise the usage.
- Explain why it was correct (e.g., "použila si to idiomaticky", "gramaticky správne", "významovo presné").

If Incorrect Context:
- State clearly it was incorrect or awkward.
- Provide a suggestion: either a better word for that context or a reformulated sentence that correctly uses the target word.
- Explain why the original was wrong (e.g., "nesprávna kolokácia", "odlišný význam", "nevhodný register").
- Provide a clear contrast example.

Return the result as a JSON object matching the defined schema."#;

/// Values substituted into [`SYSTEM_INSTRUCTION_TEMPLATE`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorProfile {
    pub brand: String,
    pub feedback_language: String,
}

impl Default for TutorProfile {
    fn default() -> Self {
        Self {
            brand: "Take Away English".to_string(),
            feedback_language: "Slovak".to_string(),
        }
    }
}

impl TutorProfile {
    /// Set the brand name the tutor speaks for
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the language the feedback is written in
    pub fn with_feedback_language(mut self, language: impl Into<String>) -> Self {
        self.feedback_language = language.into();
        self
    }

    /// Render the system instruction
    pub fn system_instruction(&self) -> String {
        SYSTEM_INSTRUCTION_TEMPLATE
            .replace("{brand}", &self.brand)
            .replace("{feedback_language}", &self.feedback_language)
    }
}
