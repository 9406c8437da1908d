//! Credential probe for the Gemini API key.
//!
//! Attempts one lightweight generation and exits with a cause-specific
//! status code so calling scripts can branch: 0 on success, 2 when the
//! credential is missing, 3 when the client cannot be created, 4 when the
//! API call fails.

use abacus_core::{DEFAULT_BASE_URL, DEFAULT_MODEL, TutorConfigBuilder};
use abacus_error::GeminiErrorKind;
use abacus_models::GeminiClient;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the credential probe.
#[derive(Parser, Debug)]
#[command(name = "keycheck")]
#[command(about = "Test GEMINI_API_KEY by making a small generation")]
#[command(version)]
struct Args {
    /// Model to probe
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Prompt sent for the probe generation
    #[arg(long, default_value = "Say hello in one sentence.")]
    prompt: String,

    /// Output length cap for the probe generation
    #[arg(long, default_value_t = 64)]
    max_tokens: u32,
}

async fn perform_check(args: &Args) -> i32 {
    let config = TutorConfigBuilder::default()
        .api_key(
            std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
        )
        .model(args.model.clone())
        .base_url(
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        )
        .build()
        .expect("Valid TutorConfig");

    let client = match GeminiClient::new(&config) {
        Ok(client) => client,
        Err(e) => match e.kind {
            GeminiErrorKind::MissingApiKey => {
                eprintln!("ERROR: GEMINI_API_KEY environment variable not set.");
                return 2;
            }
            _ => {
                eprintln!("ERROR: failed to create Gemini client: {}", e);
                return 3;
            }
        },
    };

    match client
        .generate_content(&args.prompt, None, Some(args.max_tokens))
        .await
    {
        Ok(text) => {
            println!("Gemini key test successful. Sample output:\n");
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("ERROR: failed to call Gemini API: {}", e);
            4
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    std::process::exit(perform_check(&args).await);
}
