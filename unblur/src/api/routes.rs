use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::openapi;
use super::AppState;

// Above axum's 2 MiB default so oversize uploads reach the validator and
// fail with its 5 MiB rule instead of a framework 413.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/upload", post(handlers::upload::upload_and_recognize))
        .route(
            "/upload-stream",
            post(handlers::stream::upload_and_recognize_stream),
        )
        .route(
            "/upload-stream-plain",
            post(handlers::stream::upload_and_recognize_stream_plain),
        )
        .route("/refine", post(handlers::refine::refine_text))
        .route("/tune", post(handlers::tune::tune_text))
        .route("/openapi.json", get(openapi::openapi_json));

    Router::new()
        .route("/", get(handlers::health::root))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
