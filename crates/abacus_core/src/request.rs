//! Request and response envelope for tutor generation.

use serde::{Deserialize, Serialize};

/// Sampling temperature applied when the caller omits one.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Output length cap applied when the caller omits one.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 512;

/// A student question plus generation parameters.
///
/// Constructed per call, never persisted. Missing JSON fields take the
/// documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub question: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl GenerateRequest {
    /// Creates a request for the given question with default parameters.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_output_tokens() -> u32 {
    DEFAULT_MAX_OUTPUT_TOKENS
}

/// The answer envelope returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub answer: String,
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"question": "What is 7*8?"}"#).expect("Valid request");

        assert_eq!(request.question, "What is 7*8?");
        assert_eq!(request.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(request.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
    }

    #[test]
    fn missing_question_is_rejected() {
        let result: Result<GenerateRequest, _> = serde_json::from_str(r#"{"temperature": 0.9}"#);

        assert!(result.is_err());
    }

    #[test]
    fn response_round_trips_through_json() {
        let response = GenerateResponse {
            answer: "56".to_string(),
            model: Some("gemini-2.5-flash".to_string()),
        };

        let json = serde_json::to_string(&response).expect("Valid JSON");
        assert!(json.contains(r#""answer":"56""#));

        let parsed: GenerateResponse = serde_json::from_str(&json).expect("Valid response");
        assert_eq!(parsed, response);
    }
}
