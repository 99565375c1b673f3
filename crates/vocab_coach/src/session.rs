//! Practice session: input validation, in-flight guard and the latest result

use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::debug;

use crate::error::{CoachError, InputField, Result};
use crate::feedback::FeedbackResponse;
use crate::feedback_client::FeedbackClient;
use crate::model::{ModelBackend, ModelConfig, OpenAiBackend};

/// Learner input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeInput {
    pub target_words: String,
    pub user_sentences: String,
}

/// Check that both fields are non-empty after trimming.
///
/// The values are kept as typed; trimming only decides emptiness.
pub fn validate_input(target_words: &str, user_sentences: &str) -> Result<PracticeInput> {
    if target_words.trim().is_empty() {
        return Err(CoachError::EmptyInput {
            field: InputField::TargetWords,
        });
    }
    if user_sentences.trim().is_empty() {
        return Err(CoachError::EmptyInput {
            field: InputField::UserSentences,
        });
    }
    Ok(PracticeInput {
        target_words: target_words.to_string(),
        user_sentences: user_sentences.to_string(),
    })
}

/// A completed evaluation held in the session's result slot
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub input: PracticeInput,
    pub response: FeedbackResponse,
    pub completed_at: DateTime<Local>,
}

/// Clears the in-flight flag when the call finishes, whatever the outcome
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Drives evaluations for one learner.
///
/// At most one request is in flight; a trigger while busy is rejected with
/// [`CoachError::Busy`]. Each successful call replaces the previous result.
pub struct PracticeSession<B: ModelBackend = OpenAiBackend> {
    client: FeedbackClient<B>,
    in_flight: AtomicBool,
    latest: Mutex<Option<Evaluation>>,
}

impl PracticeSession<OpenAiBackend> {
    /// Create a session backed by the OpenAI-compatible model service
    pub fn new(config: ModelConfig) -> Self {
        Self::with_client(FeedbackClient::new(config))
    }
}

impl<B: ModelBackend> PracticeSession<B> {
    pub fn with_client(client: FeedbackClient<B>) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
            latest: Mutex::new(None),
        }
    }

    /// Whether an evaluation is currently in flight
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// The most recent successful evaluation, if any
    pub fn latest(&self) -> Option<Evaluation> {
        self.slot().clone()
    }

    /// Drop the stored result
    pub fn reset(&self) {
        *self.slot() = None;
    }

    /// Validate the input, run one evaluation and store its result
    pub async fn submit(&self, target_words: &str, user_sentences: &str) -> Result<Evaluation> {
        let _guard = self.begin()?;
        let input = validate_input(target_words, user_sentences)?;

        self.reset();

        let response = self
            .client
            .get_language_feedback(&input.target_words, &input.user_sentences)
            .await?;

        let evaluation = Evaluation {
            input,
            response,
            completed_at: Local::now(),
        };
        *self.slot() = Some(evaluation.clone());

        debug!("Stored evaluation completed at {}", evaluation.completed_at);
        Ok(evaluation)
    }

    fn begin(&self) -> Result<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| CoachError::Busy)?;
        Ok(InFlightGuard(&self.in_flight))
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Evaluation>> {
        // The slot is only ever overwritten whole, so a poisoned value is still usable
        self.latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
