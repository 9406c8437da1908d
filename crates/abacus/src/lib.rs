//! Unified interface for the Abacus Gemini math-tutor proxy.
//!
//! Re-exports the pieces a caller needs alongside the CLI plumbing used by
//! the `abacus` and `keycheck` binaries.

pub mod cli;

pub use abacus_core::{GenerateRequest, GenerateResponse, TutorConfig};
pub use abacus_models::{GeminiClient, ParamSupport};
