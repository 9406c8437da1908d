//! Data transfer objects for the `generateContent` wire format.

use serde::Serialize;

/// Request body for a `generateContent` call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Prompt contents
    pub contents: Vec<Content>,
    /// Generation parameters, omitted entirely when none apply
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A block of prompt content.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Content parts
    pub parts: Vec<Part>,
}

/// A single text part.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    /// Prompt text
    pub text: String,
}

/// Generation parameters accepted by the API surface.
///
/// Fields left unset are skipped during serialization, so the upstream
/// never sees a parameter the configured surface does not accept.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}
