//! Ask command handler.

use abacus_core::{GenerateRequest, TutorConfig};
use abacus_error::{AbacusResult, HttpError};
use abacus_models::GeminiClient;
use std::time::Duration;
use tracing::debug;

/// Network budget for one proxied generation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Handle the `ask` command
///
/// Returns the text to print on stdout: the raw proxy response body in
/// server mode, or the extracted answer in direct mode.
pub async fn handle_ask_command(
    server: String,
    question: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
    direct: bool,
) -> AbacusResult<String> {
    let mut request = GenerateRequest::new(question);
    if let Some(temperature) = temperature {
        request.temperature = temperature;
    }
    if let Some(max_output_tokens) = max_output_tokens {
        request.max_output_tokens = max_output_tokens;
    }

    if direct {
        let config = TutorConfig::from_env()?;
        let client = GeminiClient::new(&config)?;
        let response = client.generate(&request).await?;
        Ok(response.answer)
    } else {
        Ok(post_generate(&server, &request).await?)
    }
}

/// POST a generation request to a running proxy and return the raw body.
///
/// # Errors
///
/// Fails on transport errors (including the 30-second timeout) and on any
/// non-success status; the error message carries the status code and the
/// response body.
pub async fn post_generate(server: &str, request: &GenerateRequest) -> Result<String, HttpError> {
    let url = format!("{}/generate", server.trim_end_matches('/'));
    debug!(%url, "posting generation request");

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| HttpError::new(format!("failed to build HTTP client: {}", e)))?;

    let response = client
        .post(&url)
        .json(request)
        .send()
        .await
        .map_err(|e| HttpError::new(format!("request to {} failed: {}", url, e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| HttpError::new(format!("failed to read response from {}: {}", url, e)))?;

    if !status.is_success() {
        return Err(HttpError::new(format!(
            "server returned {}: {}",
            status, body
        )));
    }

    Ok(body)
}
