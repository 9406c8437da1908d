//! Routes and handlers for the tutor proxy API.

use abacus_core::{GenerateRequest, GenerateResponse, TutorConfig};
use abacus_error::{AbacusResult, GeminiErrorKind, HttpError};
use abacus_models::GeminiClient;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// Immutable process configuration.
    pub config: Arc<TutorConfig>,
}

/// Error body returned on generation failures.
#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    detail: String,
}

impl ErrorBody {
    fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Creates the API router.
pub fn create_router(config: TutorConfig) -> Router {
    let state = ApiState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/generate", post(generate))
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Generate a tutor-style answer from the Gemini API.
///
/// The client is built lazily per request so the process can start without
/// a credential; misconfiguration surfaces as 500, upstream failures as 502.
#[instrument(skip(state, request))]
async fn generate(
    State(state): State<ApiState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorBody>)> {
    let client = GeminiClient::new(&state.config).map_err(|e| match e.kind {
        GeminiErrorKind::MissingApiKey => {
            error!("generation requested without a configured credential");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("GEMINI_API_KEY not configured on server")),
            )
        }
        _ => {
            error!(error = %e, "failed to create Gemini client");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(e.to_string())),
            )
        }
    })?;

    let response = client.generate(&request).await.map_err(|e| {
        error!(error = %e, "generation failed");
        (StatusCode::BAD_GATEWAY, Json(ErrorBody::new(e.to_string())))
    })?;

    Ok(Json(response))
}

/// Binds the listener and serves the API until the process exits.
pub async fn serve(config: TutorConfig) -> AbacusResult<()> {
    let addr = format!("0.0.0.0:{}", config.port());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HttpError::new(format!("failed to bind {}: {}", addr, e)))?;

    info!(%addr, "tutor proxy listening");

    axum::serve(listener, create_router(config))
        .await
        .map_err(|e| HttpError::new(format!("server error: {}", e)))?;

    Ok(())
}
