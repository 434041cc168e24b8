use std::convert::Infallible;

use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use futures::{Stream, StreamExt};

use crate::api::extractors::read_image_upload;
use crate::api::AppState;
use crate::error::Result;
use crate::progress::recognition_events;

/// `POST /api/upload-stream`
///
/// SSE variant: the terminal event is `success` or `error`; no `end`
/// marker follows.
#[utoipa::path(
    post,
    path = "/api/upload-stream",
    tag = "recognition",
    request_body(
        content_type = "multipart/form-data",
        content = String,
        description = "Image file (jpeg/png, max 5 MB) with optional custom_prompt field"
    ),
    responses(
        (status = 200, description = "Progress event stream", body = String, content_type = "text/event-stream"),
        (status = 400, description = "Invalid upload"),
    )
)]
pub async fn upload_and_recognize_stream(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Sse<impl Stream<Item = std::result::Result<Event, Infallible>>>> {
    let upload = read_image_upload(multipart).await?;

    let events = recognition_events(
        state.glm.clone(),
        upload.bytes,
        upload.content_type,
        upload.custom_prompt,
        false,
    )
    .map(|event| {
        let payload = serde_json::to_string(&event).unwrap_or_default();
        Ok(Event::default().data(payload))
    });

    Ok(Sse::new(events).keep_alive(KeepAlive::new()))
}

/// `POST /api/upload-stream-plain`
///
/// Plain-text variant kept for clients that cannot consume
/// `text/event-stream`: same `data:`-framed JSON lines, and an `end`
/// marker after `success`.
#[utoipa::path(
    post,
    path = "/api/upload-stream-plain",
    tag = "recognition",
    request_body(
        content_type = "multipart/form-data",
        content = String,
        description = "Image file (jpeg/png, max 5 MB) with optional custom_prompt field"
    ),
    responses(
        (status = 200, description = "Progress event stream", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid upload"),
    )
)]
pub async fn upload_and_recognize_stream_plain(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response> {
    let upload = read_image_upload(multipart).await?;

    let lines = recognition_events(
        state.glm.clone(),
        upload.bytes,
        upload.content_type,
        upload.custom_prompt,
        true,
    )
    .map(|event| Ok::<_, Infallible>(event.to_sse_line()));

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
        (header::CACHE_CONTROL, "no-cache"),
    ];

    Ok((headers, Body::from_stream(lines)).into_response())
}
