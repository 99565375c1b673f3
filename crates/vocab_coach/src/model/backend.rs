//! Backend seam between the feedback client and a model provider

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{CoachError, Result};
use crate::request::FeedbackRequest;

/// HTTP statuses that always mean "try again later"
pub const RATE_LIMIT_STATUSES: [u16; 3] = [429, 503, 529];

lazy_static! {
    static ref RATE_LIMIT_MARKERS: Regex = Regex::new(
        r"(?i)\b(429|503)\b|resource[_ ]exhausted|rate[_ -]?limit|quota|overloaded|\bunavailable\b|too many requests"
    )
    .unwrap();
}

/// A model service that can answer a [`FeedbackRequest`]
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Perform exactly one outbound call and return the response text, if any.
    ///
    /// Provider failures must already be classified
    /// (see [`classify_provider_failure`]).
    async fn generate(&self, request: &FeedbackRequest) -> Result<Option<String>>;
}

#[async_trait]
impl<B: ModelBackend + ?Sized> ModelBackend for std::sync::Arc<B> {
    async fn generate(&self, request: &FeedbackRequest) -> Result<Option<String>> {
        (**self).generate(request).await
    }
}

/// Check a provider error description for rate-limit or overload markers
pub fn is_rate_limit_marker(detail: &str) -> bool {
    RATE_LIMIT_MARKERS.is_match(detail)
}

/// Turn a provider failure into a classified error.
///
/// The HTTP status decides when there is one: 429/503/529 are transient,
/// any other 4xx is not. The text markers only decide for 5xx responses and
/// failures without a status.
pub fn classify_provider_failure(status: Option<u16>, detail: impl Into<String>) -> CoachError {
    let detail = detail.into();
    let transient = match status {
        Some(code) if RATE_LIMIT_STATUSES.contains(&code) => true,
        Some(code) if (400..500).contains(&code) => false,
        _ => is_rate_limit_marker(&detail),
    };

    let detail = match status {
        Some(code) => format!("HTTP {}: {}", code, detail),
        None => detail,
    };

    if transient {
        CoachError::RateLimited(detail)
    } else {
        CoachError::Provider(detail)
    }
}
