use std::time::Instant;

use tracing::{info, warn};

use crate::config::GlmConfig;
use crate::error::{Result, UnblurError};
use crate::glm::api::GlmApiClient;
use crate::glm::cleaner::clean_response_text;
use crate::glm::prompts;

#[derive(Clone)]
enum GlmBackend {
    Api { client: GlmApiClient },
    Unavailable { reason: String },
}

/// Recognition and refinement operations against the GLM API.
///
/// Cheap to clone; the only long-lived state is the shared HTTP client
/// handle. Constructed once at startup and injected into handlers through
/// application state, so tests can point it at a stub server.
#[derive(Clone)]
pub struct GlmProvider {
    backend: GlmBackend,
}

/// Result of a successful recognition or refinement call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionOutcome {
    /// Cleaned text. May be empty when the model found nothing to read.
    pub text: String,
    /// Wall-clock duration of the external call, in seconds.
    pub processing_time: f64,
}

/// Round a duration in seconds to two decimals for API responses.
pub fn round_secs(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}

impl GlmProvider {
    pub fn new(config: &GlmConfig) -> Self {
        match GlmApiClient::new(config) {
            Ok(client) => {
                info!(model = %config.model, "GLM recognition backend initialized");
                Self {
                    backend: GlmBackend::Api { client },
                }
            }
            Err(e) => {
                let reason = e.to_string();
                warn!("GLM recognition backend unavailable: {}", reason);
                Self {
                    backend: GlmBackend::Unavailable { reason },
                }
            }
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            backend: GlmBackend::Unavailable {
                reason: reason.to_string(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, GlmBackend::Unavailable { .. })
    }

    fn client(&self) -> Result<&GlmApiClient> {
        match &self.backend {
            GlmBackend::Api { client } => Ok(client),
            GlmBackend::Unavailable { reason } => Err(UnblurError::Unavailable(reason.clone())),
        }
    }

    /// Recognize text in an image, optionally with a caller-supplied prompt.
    pub async fn recognize(
        &self,
        image_bytes: &[u8],
        custom_prompt: Option<&str>,
    ) -> Result<RecognitionOutcome> {
        let client = self.client()?;
        let prompt = prompts::recognition_prompt(custom_prompt);

        info!(payload_bytes = image_bytes.len(), "Starting text recognition");

        let started = Instant::now();
        let raw = client.recognize(image_bytes, prompt).await?;
        let text = clean_response_text(&raw);

        info!(
            raw_len = raw.len(),
            cleaned_len = text.len(),
            "Text recognition completed"
        );

        Ok(RecognitionOutcome {
            text,
            processing_time: round_secs(started.elapsed().as_secs_f64()),
        })
    }

    /// Apply a natural-language instruction to previously recognized text.
    pub async fn refine(
        &self,
        original_text: &str,
        instruction: &str,
    ) -> Result<RecognitionOutcome> {
        let client = self.client()?;
        let prompt = prompts::refinement_prompt(original_text, instruction);

        info!(original_len = original_text.len(), "Starting text refinement");

        let started = Instant::now();
        let raw = client.complete(&prompt).await?;
        let text = clean_response_text(&raw);

        info!(
            raw_len = raw.len(),
            cleaned_len = text.len(),
            "Text refinement completed"
        );

        Ok(RecognitionOutcome {
            text,
            processing_time: round_secs(started.elapsed().as_secs_f64()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_key() -> GlmConfig {
        GlmConfig {
            api_key: None,
            base_url: "https://open.bigmodel.cn/api/paas/v4".to_string(),
            model: "glm-4.5v".to_string(),
            timeout_secs: 120,
        }
    }

    #[test]
    fn provider_without_key_is_unavailable() {
        let provider = GlmProvider::new(&config_without_key());
        assert!(!provider.is_available());
    }

    #[test]
    fn provider_with_key_is_available() {
        let config = GlmConfig {
            api_key: Some("test-key".to_string()),
            ..config_without_key()
        };
        let provider = GlmProvider::new(&config);
        assert!(provider.is_available());
    }

    #[tokio::test]
    async fn unavailable_provider_fails_recognition() {
        let provider = GlmProvider::unavailable("no credential configured");
        let result = provider.recognize(&[0u8; 4], None).await;
        assert!(matches!(result, Err(UnblurError::Unavailable(_))));
    }

    #[tokio::test]
    async fn unavailable_provider_fails_refinement() {
        let provider = GlmProvider::unavailable("no credential configured");
        let result = provider.refine("text", "instruction").await;
        assert!(matches!(result, Err(UnblurError::Unavailable(_))));
    }

    #[test]
    fn round_secs_keeps_two_decimals() {
        assert_eq!(round_secs(1.2345), 1.23);
        assert_eq!(round_secs(2.678), 2.68);
        assert_eq!(round_secs(0.0), 0.0);
    }
}
