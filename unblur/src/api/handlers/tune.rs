use axum::extract::{Form, State};
use axum::Json;

use crate::api::AppState;
use crate::error::Result;
use crate::models::{TuneRequest, TuneResponse};

/// `POST /api/tune`
///
/// Form-based refinement path kept for legacy clients. Shares the
/// refinement client (and its cleaner) with `/api/refine`; only the
/// request/response shape differs. Failures surface as HTTP errors.
#[utoipa::path(
    post,
    path = "/api/tune",
    tag = "refinement",
    request_body(content_type = "application/x-www-form-urlencoded", content = TuneRequest),
    responses(
        (status = 200, description = "Tuned text", body = TuneResponse),
        (status = 500, description = "Recognition service not configured"),
        (status = 502, description = "Upstream API failure"),
    )
)]
pub async fn tune_text(
    State(state): State<AppState>,
    Form(request): Form<TuneRequest>,
) -> Result<Json<TuneResponse>> {
    let outcome = state.glm.refine(&request.text, &request.instruction).await?;

    Ok(Json(TuneResponse {
        success: true,
        tuned_text: outcome.text,
        original_instruction: request.instruction,
    }))
}
