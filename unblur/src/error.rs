use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnblurError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("GLM API returned no choices")]
    EmptyResponse,

    #[error("GLM API error: {0}")]
    Api(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Multipart error: {0}")]
    Multipart(String),

    #[error("Recognition unavailable: {0}")]
    Unavailable(String),
}

impl IntoResponse for UnblurError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            UnblurError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            UnblurError::Multipart(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            UnblurError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            UnblurError::EmptyResponse => (StatusCode::BAD_GATEWAY, self.to_string()),
            UnblurError::Api(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            UnblurError::Http(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            UnblurError::Unavailable(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, UnblurError>;
