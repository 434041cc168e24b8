//! Pre-flight validation of uploaded images.
//!
//! Runs before any network call: cheap declared-type and size checks first,
//! then a decode pass that catches mislabeled content types and corrupt
//! payloads.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::error::{Result, UnblurError};

/// Upload size cap shared by every upload endpoint.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

/// Validate image bytes against the declared content type.
///
/// Pure function of its inputs; all rejections are
/// [`UnblurError::Validation`] with a human-readable reason.
pub fn validate_image(bytes: &[u8], declared_content_type: Option<&str>) -> Result<()> {
    let content_type = declared_content_type
        .ok_or_else(|| UnblurError::Validation("Only image files are supported".to_string()))?;

    let normalized = content_type.to_ascii_lowercase();
    if !normalized.starts_with("image/") {
        return Err(UnblurError::Validation(
            "Only image files are supported".to_string(),
        ));
    }

    if !ALLOWED_CONTENT_TYPES.contains(&normalized.as_str()) {
        return Err(UnblurError::Validation(
            "Only JPG, JPEG and PNG images are supported".to_string(),
        ));
    }

    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(UnblurError::Validation(
            "Image must not exceed 5 MB".to_string(),
        ));
    }

    // Content-level check: the actual byte format must be an allowed one,
    // regardless of what the declared type claims.
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| UnblurError::Validation(format!("Failed to read image: {e}")))?;

    match reader.format() {
        Some(ImageFormat::Jpeg) | Some(ImageFormat::Png) => {}
        Some(other) => {
            return Err(UnblurError::Validation(format!(
                "Unsupported image format: {}",
                other.extensions_str().first().unwrap_or(&"unknown")
            )));
        }
        None => {
            return Err(UnblurError::Validation(
                "Unrecognized image data".to_string(),
            ));
        }
    }

    reader
        .decode()
        .map_err(|e| UnblurError::Validation(format!("Failed to decode image: {e}")))?;

    Ok(())
}
