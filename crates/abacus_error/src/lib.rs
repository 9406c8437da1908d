//! Error types for the Abacus tutor proxy.
//!
//! This crate provides the error types used across the Abacus workspace:
//! location-tracked structs for configuration and transport failures, a
//! kind-discriminated error for the Gemini generation path, and the
//! crate-level [`AbacusError`] facade with its [`AbacusResult`] alias.

mod config;
mod gemini;
mod http;

pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum AbacusErrorKind {
    /// Gemini generation error
    Gemini(GeminiError),
    /// Configuration error
    Config(ConfigError),
    /// HTTP transport error
    Http(HttpError),
}

impl std::fmt::Display for AbacusErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbacusErrorKind::Gemini(e) => write!(f, "{}", e),
            AbacusErrorKind::Config(e) => write!(f, "{}", e),
            AbacusErrorKind::Http(e) => write!(f, "{}", e),
        }
    }
}

/// Abacus error with kind discrimination.
#[derive(Debug)]
pub struct AbacusError(Box<AbacusErrorKind>);

impl AbacusError {
    /// Create a new error from a kind.
    pub fn new(kind: AbacusErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AbacusErrorKind {
        &self.0
    }
}

impl std::fmt::Display for AbacusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for AbacusError {}

// Generic From implementation for any type that converts to AbacusErrorKind
impl<T> From<T> for AbacusError
where
    T: Into<AbacusErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Abacus operations.
pub type AbacusResult<T> = std::result::Result<T, AbacusError>;
