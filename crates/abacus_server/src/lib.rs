//! HTTP API for the Abacus tutor proxy.
//!
//! Exposes the Gemini generation client over JSON: a liveness probe at
//! `GET /health` and the tutor endpoint at `POST /generate`.

mod api;

pub use api::{ApiState, create_router, serve};
