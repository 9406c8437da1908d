//! Gemini provider integration for the Abacus tutor proxy.

mod gemini;

pub use gemini::{GeminiClient, ParamSupport};
