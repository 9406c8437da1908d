//! Core data types for the Abacus tutor proxy.
//!
//! This crate provides the configuration, prompt construction, and
//! request/response envelope shared by the server, the CLI, and the
//! credential probe.

mod config;
mod prompt;
mod request;

pub use config::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_PORT, DEFAULT_SYSTEM_PROMPT, TutorConfig,
    TutorConfigBuilder,
};
pub use prompt::build_prompt;
pub use request::{
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE, GenerateRequest, GenerateResponse,
};
