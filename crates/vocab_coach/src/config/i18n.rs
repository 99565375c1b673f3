//! User-facing messages

use phf::phf_map;
use std::fmt;
use std::str::FromStr;

/// Language of the messages shown to the learner.
///
/// This only affects the interface text. The language of the tutoring
/// feedback itself is part of the [`TutorProfile`](super::TutorProfile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Slovak,
    English,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sk" | "slovak" => Ok(Language::Slovak),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Slovak => write!(f, "sk"),
            Language::English => write!(f, "en"),
        }
    }
}

pub static MESSAGES_SK: phf::Map<&'static str, &'static str> = phf_map! {
    "title" => "Jazyková prax",
    "tagline" => "Ber toto ako svoj jazykový trenažér a zisti, či používaš nové slová v správnom kontexte.",
    "target_words_label" => "Tieto slová si chcem precvičiť",
    "sentences_label" => "Tu ich použi vo vetách",
    "submit" => "Znie to fajn?",
    "loading" => "Uvidíme!",
    "fill_both_fields" => "Prosím, vyplň obe polia.",
    "service_busy" => "Služba je momentálne preťažená. Skús kratší text alebo skontroluj pripojenie.",
    "generic_error" => "Niekde sa stala chyba. Skús to prosím znova.",
    "summary" => "Zhrnutie",
    "correct" => "Správne",
    "needs_attention" => "Vyžaduje pozornosť",
    "your_sentence" => "Tvoja veta",
    "feedback" => "Spätná väzba",
    "explanation" => "Vysvetlenie",
    "suggestion" => "Návrh na vylepšenie",
    "usage_example" => "Príklad použitia",
    "goodbye" => "Dovidenia!",
};

pub static MESSAGES_EN: phf::Map<&'static str, &'static str> = phf_map! {
    "title" => "Language practice",
    "tagline" => "Use this as your language trainer and check whether you use new words in the right context.",
    "target_words_label" => "Words I want to practice",
    "sentences_label" => "Use them in sentences",
    "submit" => "Sounds good?",
    "loading" => "Let's see!",
    "fill_both_fields" => "Please fill in both fields.",
    "service_busy" => "The service is temporarily busy. Try a shorter text or check your connection.",
    "generic_error" => "Something went wrong. Please try again.",
    "summary" => "Summary",
    "correct" => "Correct",
    "needs_attention" => "Needs attention",
    "your_sentence" => "Your sentence",
    "feedback" => "Feedback",
    "explanation" => "Explanation",
    "suggestion" => "Suggested improvement",
    "usage_example" => "Usage example",
    "goodbye" => "Goodbye!",
};

/// Get the message table for a language
pub fn get_messages(lang: Language) -> &'static phf::Map<&'static str, &'static str> {
    match lang {
        Language::Slovak => &MESSAGES_SK,
        Language::English => &MESSAGES_EN,
    }
}

/// Look up a message, falling back to the key itself
pub fn get_message(key: &str, lang: Language) -> String {
    get_messages(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}
