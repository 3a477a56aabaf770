//! Text-generation provider abstraction.
//!
//! The dispatcher depends only on "prompt in, text reply out"; the concrete
//! backend (Gemini in production, mock in tests) is injected at startup.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a provider call.
pub struct ProviderResponse {
    /// Reply text, if the provider produced any.
    pub text: Option<String>,
}

/// Trait for single-turn text generation providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a reply for a single-turn prompt. One attempt, no retry.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;
}
