//! Shared multipart extraction for the upload endpoints.

use axum::extract::Multipart;

use crate::error::{Result, UnblurError};

/// Fields read from an upload form: the image plus an optional prompt.
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub custom_prompt: Option<String>,
}

pub async fn read_image_upload(mut multipart: Multipart) -> Result<ImageUpload> {
    let mut bytes: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;
    let mut custom_prompt: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UnblurError::Multipart(format!("Failed to read multipart field: {e}")))?
    {
        match field.name().unwrap_or("") {
            "file" => {
                content_type = field.content_type().map(|ct| ct.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| UnblurError::Multipart(format!("Failed to read file: {e}")))?;
                bytes = Some(data.to_vec());
            }
            "custom_prompt" => {
                let text = field.text().await.map_err(|e| {
                    UnblurError::Multipart(format!("Failed to read custom_prompt: {e}"))
                })?;
                if !text.trim().is_empty() {
                    custom_prompt = Some(text);
                }
            }
            _ => {}
        }
    }

    let bytes =
        bytes.ok_or_else(|| UnblurError::Multipart("Missing 'file' field".to_string()))?;

    Ok(ImageUpload {
        bytes,
        content_type,
        custom_prompt,
    })
}
