//! Mock provider implementation for testing.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

/// Mock text provider for testing.
pub struct MockTextProvider {
    enabled: bool,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(ProviderResponse {
            text: Some(format!("Mock response for: {}", prompt)),
        })
    }
}
