//! Vocab Coach CLI - practice vocabulary with AI tutoring feedback
//!
//! Usage:
//!     vocab-coach [OPTIONS]
//!
//! Environment Variables:
//!     VOCAB_COACH_BASE_URL: Model API base URL (default: Gemini OpenAI-compatible endpoint)
//!     VOCAB_COACH_MODEL: Model name (default: gemini-3-flash-preview)
//!     VOCAB_COACH_API_KEY: API key for model authentication (falls back to GEMINI_API_KEY)
//!     VOCAB_COACH_LANG: Interface language, sk or en (default: sk)

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vocab_coach::{
    get_message, CoachError, Correction, Evaluation, FeedbackResponse, Language, ModelConfig,
    PracticeSession,
};

/// Vocab Coach - check whether you use new words in the right context
#[derive(Parser, Debug)]
#[command(name = "vocab-coach")]
#[command(about = "Vocab Coach - AI tutoring feedback for vocabulary practice")]
#[command(after_help = r#"Examples:
    # Interactive mode
    vocab-coach

    # Evaluate one attempt and exit
    vocab-coach --words "mitigate" --sentences "I tried to mitigate the fire by pouring water."

    # Print the raw feedback JSON
    vocab-coach --words "break a leg" --sentences "Break a leg tonight!" --json

    # English interface
    vocab-coach --lang en
"#)]
struct Cli {
    // Model options
    /// Model API base URL
    #[arg(
        long,
        env = "VOCAB_COACH_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta/openai"
    )]
    base_url: String,

    /// Model name
    #[arg(long, env = "VOCAB_COACH_MODEL", default_value = "gemini-3-flash-preview")]
    model: String,

    /// API key for model authentication (resolved when a request is sent)
    #[arg(long, env = "VOCAB_COACH_API_KEY", hide_env_values = true)]
    apikey: Option<String>,

    // Practice options
    /// Words or phrases to practice (comma separated)
    #[arg(short = 'w', long)]
    words: Option<String>,

    /// Sentences using the words
    #[arg(short = 's', long)]
    sentences: Option<String>,

    /// Print the validated feedback as JSON
    #[arg(long)]
    json: bool,

    // Other options
    /// Interface language (sk or en)
    #[arg(long, env = "VOCAB_COACH_LANG", default_value = "sk", value_parser = ["sk", "en"])]
    lang: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Print application header
fn print_header(model_config: &ModelConfig, lang: Language) {
    println!("{}", "=".repeat(50));
    println!("{}", get_message("title", lang));
    println!("{}", get_message("tagline", lang));
    println!("{}", "=".repeat(50));
    println!("Model: {}", model_config.model_name);
    println!("Base URL: {}", model_config.base_url);
    println!("{}", "=".repeat(50));
}

fn print_correction(correction: &Correction, lang: Language) {
    let status = if correction.is_correct {
        format!("\u{2713} {}", get_message("correct", lang))
    } else {
        format!("\u{26A0} {}", get_message("needs_attention", lang))
    };

    println!("{}", "-".repeat(50));
    println!("[{}] {}", correction.word_practiced.to_uppercase(), status);
    println!(
        "{}: \"{}\"",
        get_message("your_sentence", lang),
        correction.original_sentence
    );
    println!("{}: {}", get_message("feedback", lang), correction.feedback);
    println!("{}: {}", get_message("explanation", lang), correction.explanation);

    if let Some(suggestion) = &correction.suggestion {
        println!("{}: {}", get_message("suggestion", lang), suggestion);
    }
    if let Some(example) = &correction.correct_example {
        println!(
            "{} \"{}\": \"{}\"",
            get_message("usage_example", lang),
            correction.word_practiced,
            example
        );
    }
}

/// Print a feedback response
fn print_feedback(response: &FeedbackResponse, lang: Language) {
    println!();
    println!("{}", "=".repeat(50));
    println!("{}", get_message("summary", lang));
    println!("{}", response.summary);

    for correction in &response.corrections {
        print_correction(correction, lang);
    }
    println!("{}", "=".repeat(50));
}

fn print_evaluation(evaluation: &Evaluation, lang: Language, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation.response)?);
    } else {
        print_feedback(&evaluation.response, lang);
    }
    Ok(())
}

/// Print the user-facing message for a failed evaluation
fn report_failure(err: &CoachError, lang: Language) {
    debug!("Evaluation failed: {}", err);
    eprintln!("\n{}\n", err.category().user_message(lang));
}

/// Read one line; `None` on EOF
fn prompt_line(label: &str) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;
    read_line_from(&mut io::stdin().lock())
}

fn read_line_from(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

fn is_quit(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("quit")
        || input.eq_ignore_ascii_case("exit")
        || input.eq_ignore_ascii_case("q")
}

/// Run interactive mode
async fn run_interactive_mode(session: &PracticeSession, lang: Language, json: bool) -> Result<()> {
    println!("\nType 'quit' to exit.\n");

    loop {
        let Some(words) = prompt_line(&format!(
            "\u{1F3AF} {}",
            get_message("target_words_label", lang)
        ))?
        else {
            break;
        };
        if is_quit(&words) {
            break;
        }

        let Some(sentences) = prompt_line(&format!(
            "\u{1F680} {}",
            get_message("sentences_label", lang)
        ))?
        else {
            break;
        };

        println!("{}", get_message("loading", lang));
        match session.submit(&words, &sentences).await {
            Ok(evaluation) => print_evaluation(&evaluation, lang, json)?,
            Err(e) => report_failure(&e, lang),
        }
    }

    println!("{}", get_message("goodbye", lang));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let filter = match args.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let lang: Language = args.lang.parse().map_err(anyhow::Error::msg)?;

    let mut model_config = ModelConfig::new(&args.base_url, &args.model);
    if let Some(apikey) = &args.apikey {
        model_config = model_config.with_api_key(apikey);
    }

    info!("Using model {} at {}", model_config.model_name, model_config.base_url);
    let session = PracticeSession::new(model_config.clone());

    // One-shot mode when either field is given on the command line
    if args.words.is_some() || args.sentences.is_some() {
        let words = args.words.as_deref().unwrap_or_default();
        let sentences = args.sentences.as_deref().unwrap_or_default();

        match session.submit(words, sentences).await {
            Ok(evaluation) => print_evaluation(&evaluation, lang, args.json)?,
            Err(e) => {
                report_failure(&e, lang);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    print_header(&model_config, lang);
    run_interactive_mode(&session, lang, args.json).await
}
