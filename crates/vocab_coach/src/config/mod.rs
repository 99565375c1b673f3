//! Configuration module for vocab_coach
//!
//! This module contains:
//! - `i18n`: User-facing messages (Slovak/English)
//! - `prompts`: Tutor persona and system instruction template

mod i18n;
mod prompts;

pub use i18n::{get_message, get_messages, Language, MESSAGES_EN, MESSAGES_SK};
pub use prompts::{TutorProfile, SYSTEM_INSTRUCTION_TEMPLATE};
