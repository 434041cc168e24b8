use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GlmConfig;
use crate::error::{Result, UnblurError};

/// Low-level client for the GLM chat-completions endpoint.
///
/// Issues exactly one request per call; the caller decides what a failure
/// means. The underlying `reqwest::Client` enforces the configured
/// request-level timeout and is safe to share across concurrent requests.
#[derive(Clone, Debug)]
pub struct GlmApiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    thinking: Thinking,
}

/// GLM extended-reasoning switch. Affects only internal model computation.
#[derive(Debug, Serialize)]
struct Thinking {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum ContentPart {
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
    #[serde(rename = "text")]
    Text { text: String },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

impl GlmApiClient {
    pub fn new(config: &GlmConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            UnblurError::Unavailable("ZHIPUAI_API_KEY environment variable is required".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UnblurError::Api(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Multimodal recognition call: one user message carrying the image as
    /// a base64 data URI plus the prompt text.
    pub async fn recognize(&self, image_bytes: &[u8], prompt: &str) -> Result<String> {
        let base64_image = STANDARD.encode(image_bytes);
        // The upstream service accepts this prefix for PNG payloads too.
        let data_url = format!("data:image/jpeg;base64,{base64_image}");

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Parts(vec![
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_url },
                    },
                    ContentPart::Text {
                        text: prompt.to_string(),
                    },
                ]),
            }],
            thinking: Thinking {
                kind: "enabled".to_string(),
            },
        };

        self.send(&request).await
    }

    /// Text-only completion call used for refinement.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Text(prompt.to_string()),
            }],
            thinking: Thinking {
                kind: "enabled".to_string(),
            },
        };

        self.send(&request).await
    }

    // Single attempt per request: no retry, no backoff. Upstream failures
    // surface verbatim to the caller.
    async fn send(&self, request: &ChatRequest) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UnblurError::Api(format!(
                "GLM API request failed: {status} - {body}"
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| UnblurError::Api(format!("Failed to parse GLM response: {e}")))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .ok_or(UnblurError::EmptyResponse)?
            .message
            .content
            .unwrap_or_default();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(api_key: Option<&str>) -> GlmConfig {
        GlmConfig {
            api_key: api_key.map(String::from),
            base_url: "https://open.bigmodel.cn/api/paas/v4".to_string(),
            model: "glm-4.5v".to_string(),
            timeout_secs: 120,
        }
    }

    #[test]
    fn client_requires_api_key() {
        let result = GlmApiClient::new(&test_config(None));
        assert!(matches!(result, Err(UnblurError::Unavailable(_))));
    }

    #[test]
    fn client_with_api_key() {
        let result = GlmApiClient::new(&test_config(Some("test-key")));
        assert!(result.is_ok());
    }

    #[test]
    fn recognition_request_serializes_multimodal_message() {
        let request = ChatRequest {
            model: "glm-4.5v".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Parts(vec![
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: "data:image/jpeg;base64,AAAA".to_string(),
                        },
                    },
                    ContentPart::Text {
                        text: "read this".to_string(),
                    },
                ]),
            }],
            thinking: Thinking {
                kind: "enabled".to_string(),
            },
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["model"], "glm-4.5v");
        assert_eq!(json["thinking"]["type"], "enabled");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["type"], "image_url");
        assert!(json["messages"][0]["content"][0]["image_url"]["url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/jpeg;base64,"));
        assert_eq!(json["messages"][0]["content"][1]["type"], "text");
        assert_eq!(json["messages"][0]["content"][1]["text"], "read this");
    }

    #[test]
    fn completion_request_serializes_plain_content() {
        let request = ChatRequest {
            model: "glm-4.5v".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Text("refine this".to_string()),
            }],
            thinking: Thinking {
                kind: "enabled".to_string(),
            },
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["messages"][0]["content"], "refine this");
    }

    #[test]
    fn response_parses_missing_choices_as_empty() {
        let chat: ChatResponse = serde_json::from_str(r#"{"id": "x"}"#).expect("deserialize");
        assert!(chat.choices.is_empty());
    }

    #[test]
    fn base64_encoding_matches_standard_alphabet() {
        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(STANDARD.encode(&bytes), "/9j/4A==");
    }
}
