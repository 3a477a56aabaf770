//! Gemini AI provider implementation.
//!
//! Implements single-turn text generation against Google's Gemini
//! `generateContent` endpoint.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Build the API URL for the given method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            GEMINI_API_BASE, self.config.model, method, self.config.api_key
        )
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        let text = api_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone());

        Ok(ProviderResponse { text })
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Content,
}
