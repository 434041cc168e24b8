use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::error;

use crate::api::extractors::read_image_upload;
use crate::api::AppState;
use crate::error::{Result, UnblurError};
use crate::glm::round_secs;
use crate::models::UploadResponse;
use crate::validate::validate_image;

/// `POST /api/upload`
///
/// Single-response variant: validates the image, performs one recognition
/// call, and reports the outcome as JSON. Validation failures are 400s;
/// recognition failures come back as `success: false` bodies.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "recognition",
    request_body(
        content_type = "multipart/form-data",
        content = String,
        description = "Image file (jpeg/png, max 5 MB) with optional custom_prompt field"
    ),
    responses(
        (status = 200, description = "Recognition outcome", body = UploadResponse),
        (status = 400, description = "Invalid upload"),
    )
)]
pub async fn upload_and_recognize(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let started = Instant::now();

    let upload = read_image_upload(multipart).await?;
    validate_image(&upload.bytes, upload.content_type.as_deref())?;

    match state
        .glm
        .recognize(&upload.bytes, upload.custom_prompt.as_deref())
        .await
    {
        Ok(outcome) => Ok(Json(UploadResponse {
            success: true,
            message: "Text recognition succeeded".to_string(),
            recognized_text: Some(outcome.text),
            processing_time: Some(outcome.processing_time),
        })),
        Err(e @ UnblurError::Unavailable(_)) => Err(e),
        Err(e) => {
            error!(error = %e, "Upload recognition failed");
            Ok(Json(UploadResponse {
                success: false,
                message: format!("Recognition failed: {e}"),
                recognized_text: None,
                processing_time: Some(round_secs(started.elapsed().as_secs_f64())),
            }))
        }
    }
}
