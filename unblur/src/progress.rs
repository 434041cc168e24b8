//! Fixed-stage progress pipeline around a single recognition call.
//!
//! One inbound request drives one event stream: `start`, three `progress`
//! stages, then exactly one terminal `success` or `error`. Validation
//! failures short-circuit to `error` before any network call. The `end`
//! marker is only emitted on the endpoint variant that carries it. Single
//! producer, single consumer; events are consumed in emission order.

use async_stream::stream;
use futures::Stream;
use serde::Serialize;

use crate::glm::GlmProvider;
use crate::validate::validate_image;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProgressEvent {
    Start {
        message: String,
    },
    Progress {
        message: String,
    },
    Success {
        message: String,
        recognized_text: String,
        processing_time: f64,
    },
    Error {
        message: String,
    },
    End,
}

impl ProgressEvent {
    /// Wire format shared by both streaming endpoints: one JSON object per
    /// `data:` line, blank-line terminated.
    pub fn to_sse_line(&self) -> String {
        format!("data: {}\n\n", serde_json::to_string(self).unwrap_or_default())
    }
}

/// Drive the recognition pipeline, narrating each stage as an event.
///
/// The emitter sequences and formats; it does not alter outcomes. The
/// external call is awaited inside the generator, so dropping the stream
/// drops the in-flight call (its upstream result, if any, is discarded).
pub fn recognition_events(
    glm: GlmProvider,
    image_bytes: Vec<u8>,
    content_type: Option<String>,
    custom_prompt: Option<String>,
    emit_end: bool,
) -> impl Stream<Item = ProgressEvent> {
    stream! {
        yield ProgressEvent::Start {
            message: "Processing image".to_string(),
        };

        yield ProgressEvent::Progress {
            message: "Validating image format and size".to_string(),
        };
        if let Err(e) = validate_image(&image_bytes, content_type.as_deref()) {
            yield ProgressEvent::Error {
                message: e.to_string(),
            };
            return;
        }

        yield ProgressEvent::Progress {
            message: "Preparing image payload".to_string(),
        };

        yield ProgressEvent::Progress {
            message: "Invoking the recognition model".to_string(),
        };
        match glm.recognize(&image_bytes, custom_prompt.as_deref()).await {
            Ok(outcome) => {
                yield ProgressEvent::Success {
                    message: "Text recognition succeeded".to_string(),
                    recognized_text: outcome.text,
                    processing_time: outcome.processing_time,
                };
                if emit_end {
                    yield ProgressEvent::End;
                }
            }
            Err(e) => {
                yield ProgressEvent::Error {
                    message: format!("Recognition failed: {e}"),
                };
            }
        }
    }
}
