//! Gemini generation client.

use crate::gemini::dto::{Content, GenerateContentRequest, GenerationConfig, Part};
use abacus_core::{GenerateRequest, GenerateResponse, TutorConfig, build_prompt};
use abacus_error::{GeminiError, GeminiErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Which generation parameters the configured API surface accepts.
///
/// Older and newer `generateContent` surfaces disagree on the accepted
/// parameter set; parameters marked unsupported here are omitted from the
/// serialized request instead of failing the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSupport {
    /// The surface accepts a sampling temperature
    pub temperature: bool,
    /// The surface accepts an output length cap
    pub max_output_tokens: bool,
}

impl Default for ParamSupport {
    fn default() -> Self {
        Self {
            temperature: true,
            max_output_tokens: true,
        }
    }
}

/// Client for the Gemini `generateContent` API.
///
/// Wraps a single remote call: formats the tutor prompt, invokes the API,
/// and extracts plain text from the response. One attempt per call, no
/// retries.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    system_prompt: String,
    base_url: String,
    params: ParamSupport,
}

impl GeminiClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when the configuration
    /// carries no credential, and [`GeminiErrorKind::ClientCreation`] when
    /// the underlying HTTP client cannot be assembled.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: &TutorConfig) -> Result<Self, GeminiError> {
        let api_key = config
            .api_key()
            .clone()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        let client = Client::builder().build().map_err(|e| {
            GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string()))
        })?;

        debug!(
            model = %config.model(),
            url = %config.base_url(),
            "Created Gemini client"
        );

        Ok(Self {
            client,
            api_key,
            model: config.model().clone(),
            system_prompt: config.system_prompt().clone(),
            base_url: config.base_url().clone(),
            params: ParamSupport::default(),
        })
    }

    /// Restricts which generation parameters are sent upstream.
    pub fn with_param_support(mut self, params: ParamSupport) -> Self {
        self.params = params;
        self
    }

    /// Returns the model this client queries.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Generates a tutor-style answer for a student question.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::EmptyQuestion`] without touching the
    /// network when the question is empty; any remote failure surfaces as
    /// [`GeminiErrorKind::ApiRequest`] or [`GeminiErrorKind::HttpError`].
    #[instrument(skip(self, request), fields(model = %self.model))]
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GeminiError> {
        let prompt = build_prompt(&self.system_prompt, &request.question)?;

        let answer = self
            .generate_content(
                &prompt,
                Some(request.temperature),
                Some(request.max_output_tokens),
            )
            .await?;

        Ok(GenerateResponse {
            answer,
            model: Some(self.model.clone()),
        })
    }

    /// Issues one `generateContent` call and extracts its text.
    ///
    /// The prompt is sent as-is; this is the low-level entry shared by
    /// [`Self::generate`] and the credential probe.
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    pub async fn generate_content(
        &self,
        prompt: &str,
        temperature: Option<f32>,
        max_output_tokens: Option<u32>,
    ) -> Result<String, GeminiError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.generation_config(temperature, max_output_tokens),
        };

        // The key travels in the query string; never log the full URL.
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, "Sending generateContent request");

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        if !status.is_success() {
            error!(status = %status, error = %raw, "API error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: raw,
            }));
        }

        debug!(bytes = raw.len(), "Received response");

        Ok(extract_text(&raw))
    }

    fn generation_config(
        &self,
        temperature: Option<f32>,
        max_output_tokens: Option<u32>,
    ) -> Option<GenerationConfig> {
        let config = GenerationConfig {
            temperature: temperature.filter(|_| self.params.temperature),
            max_output_tokens: max_output_tokens.filter(|_| self.params.max_output_tokens),
        };

        if config == GenerationConfig::default() {
            None
        } else {
            Some(config)
        }
    }
}

/// Pulls a plain-text answer out of a `generateContent` response body.
///
/// The response shape is not contractually stable across API revisions:
/// prefer candidate part text, then a top-level `"text"` key, then the
/// rendering of the whole body. Never fails.
fn extract_text(body: &str) -> String {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return body.to_string(),
    };

    let mut pieces = Vec::new();
    if let Some(candidates) = value.get("candidates").and_then(|c| c.as_array()) {
        for candidate in candidates {
            let parts = candidate
                .get("content")
                .and_then(|c| c.get("parts"))
                .and_then(|p| p.as_array());
            if let Some(parts) = parts {
                for part in parts {
                    if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                        pieces.push(text.to_string());
                    }
                }
            }
        }
    }
    if !pieces.is_empty() {
        return pieces.join("\n");
    }

    if let Some(text) = value.get("text").and_then(|t| t.as_str()) {
        return text.to_string();
    }

    value.to_string()
}
