//! Configuration for the tutor proxy, sourced from the environment.

use abacus_error::ConfigError;
use derive_getters::Getters;

/// Model queried when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Tutor instruction used when `GEMINI_SYSTEM_PROMPT` is not set.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful, patient math tutor. For each student question, restate the problem briefly, provide clear step-by-step reasoning, show the final answer, and give a short tip to check the result. Use simple language suitable for learners and avoid skipping steps. Be concise but thorough.";

/// Upstream endpoint used when `GEMINI_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Listen port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Configuration for Gemini access and the HTTP listener.
///
/// Constructed once at process start and passed by reference; never reloaded.
/// The API key may be absent so that the server can start unconfigured and
/// report the problem per request.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct TutorConfig {
    /// Credential for the Gemini API
    #[builder(default)]
    api_key: Option<String>,
    /// Model identifier to query
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// System instruction prefixed to every question
    #[builder(default = "DEFAULT_SYSTEM_PROMPT.to_string()")]
    system_prompt: String,
    /// Base URL of the generative-language API
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// HTTP listen port for the proxy server
    #[builder(default = "DEFAULT_PORT")]
    port: u16,
}

impl TutorConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (optional here; required to perform a generation)
    /// - `GEMINI_MODEL` (default: "gemini-2.5-flash")
    /// - `GEMINI_SYSTEM_PROMPT` (default: tutor instruction)
    /// - `GEMINI_BASE_URL` (default: "https://generativelanguage.googleapis.com")
    /// - `PORT` (default: 8000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let system_prompt = std::env::var("GEMINI_SYSTEM_PROMPT")
            .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.to_string());
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                ConfigError::new(format!("PORT must be a valid port number, got {:?}", raw))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(TutorConfigBuilder::default()
            .api_key(api_key)
            .model(model)
            .system_prompt(system_prompt)
            .base_url(base_url)
            .port(port)
            .build()
            .expect("Valid TutorConfig"))
    }
}
