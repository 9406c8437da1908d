//! Client for the Gemini `generateContent` API.

mod client;
mod dto;

pub use client::{GeminiClient, ParamSupport};
