use axum::Json;
use utoipa::OpenApi;

use super::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "UnblurAI API",
        version = "1.0.0",
        description = "Text de-blur recognition relay backed by the GLM-4.5V vision API.",
    ),
    paths(
        handlers::health::health_check,
        handlers::upload::upload_and_recognize,
        handlers::stream::upload_and_recognize_stream,
        handlers::stream::upload_and_recognize_stream_plain,
        handlers::refine::refine_text,
        handlers::tune::tune_text,
    ),
    components(schemas(
        models::UploadResponse,
        models::RefineRequest,
        models::RefineResponse,
        models::TuneRequest,
        models::TuneResponse,
        models::HealthResponse,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "recognition", description = "Image upload and text recognition"),
        (name = "refinement", description = "Instruction-guided text refinement"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
