//! Model client module for AI inference
//!
//! This module provides:
//! - `backend`: The `ModelBackend` seam and provider error classification
//! - `client`: OpenAI-compatible model backend

mod backend;
mod client;

pub use backend::{
    classify_provider_failure, is_rate_limit_marker, ModelBackend, RATE_LIMIT_STATUSES,
};
pub use client::{ModelConfig, OpenAiBackend, API_KEY_ENV_VARS};
