use std::time::Instant;

use axum::extract::State;
use axum::Json;
use tracing::error;

use crate::api::AppState;
use crate::error::{Result, UnblurError};
use crate::glm::round_secs;
use crate::models::{RefineRequest, RefineResponse};

/// `POST /api/refine`
///
/// Applies a natural-language instruction to previously recognized text.
/// Refinement failures come back as `success: false` bodies; a missing
/// credential is a server error.
#[utoipa::path(
    post,
    path = "/api/refine",
    tag = "refinement",
    request_body = RefineRequest,
    responses(
        (status = 200, description = "Refinement outcome", body = RefineResponse),
        (status = 500, description = "Recognition service not configured"),
    )
)]
pub async fn refine_text(
    State(state): State<AppState>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<RefineResponse>> {
    let started = Instant::now();

    match state
        .glm
        .refine(&request.original_text, &request.refinement_instruction)
        .await
    {
        Ok(outcome) => Ok(Json(RefineResponse {
            success: true,
            message: "Text refinement succeeded".to_string(),
            refined_text: Some(outcome.text),
            processing_time: Some(outcome.processing_time),
        })),
        Err(e @ UnblurError::Unavailable(_)) => Err(e),
        Err(e) => {
            error!(error = %e, "Text refinement failed");
            Ok(Json(RefineResponse {
                success: false,
                message: format!("Refinement failed: {e}"),
                refined_text: None,
                processing_time: Some(round_secs(started.elapsed().as_secs_f64())),
            }))
        }
    }
}
