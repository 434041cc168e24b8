#![allow(dead_code)]

use axum::body::Body;
use axum::http::Response;
use serde_json::json;

use unblur::api::{create_router, AppState};
use unblur::config::{Config, GlmConfig, ServerConfig};
use unblur::glm::GlmProvider;

pub const BOUNDARY: &str = "unblur-test-boundary-7MA4YWxkTrZu0gW";

pub fn glm_config(base_url: &str) -> GlmConfig {
    GlmConfig {
        api_key: Some("test-key".to_string()),
        base_url: base_url.to_string(),
        model: "glm-4.5v".to_string(),
        timeout_secs: 5,
    }
}

pub fn test_config(base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        glm: glm_config(base_url),
    }
}

/// Router wired to a GLM provider pointing at the given (mock) base URL.
pub fn test_router(base_url: &str) -> axum::Router {
    let config = test_config(base_url);
    let glm = GlmProvider::new(&config.glm);
    create_router(AppState::new(config, glm))
}

/// Router whose provider has no credential configured.
pub fn router_without_credential() -> axum::Router {
    let mut config = test_config("http://127.0.0.1:9");
    config.glm.api_key = None;
    let glm = GlmProvider::new(&config.glm);
    create_router(AppState::new(config, glm))
}

/// GLM-shaped chat completion body with a single choice.
pub fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "created": 1,
        "model": "glm-4.5v",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }
        ],
        "usage": {
            "prompt_tokens": 1,
            "completion_tokens": 1,
            "total_tokens": 2
        }
    })
}

pub fn test_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::new_rgb8(width, height);
    let mut output = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut output), image::ImageFormat::Png)
        .unwrap();
    output
}

pub fn test_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::new_rgb8(width, height);
    let mut output = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut output), image::ImageFormat::Jpeg)
        .unwrap();
    output
}

/// Hand-rolled multipart body for the upload endpoints.
pub fn multipart_body(
    file_bytes: &[u8],
    content_type: &str,
    custom_prompt: Option<&str>,
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"image\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(b"\r\n");
    if let Some(prompt) = custom_prompt {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"custom_prompt\"\r\n\r\n\
                 {prompt}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_text(response).await;
    serde_json::from_str(&text).expect("JSON body")
}

/// Parse a `data:`-framed event stream into the JSON payloads, in order.
pub fn parse_event_stream(body: &str) -> Vec<serde_json::Value> {
    body.lines()
        .filter_map(|line| line.strip_prefix("data: "))
        .map(|payload| serde_json::from_str(payload).expect("event JSON"))
        .collect()
}

/// The `type` tags of a parsed event stream.
pub fn event_kinds(events: &[serde_json::Value]) -> Vec<String> {
    events
        .iter()
        .map(|event| event["type"].as_str().expect("type tag").to_string())
        .collect()
}
