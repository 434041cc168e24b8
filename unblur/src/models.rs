//! Request and response bodies for the HTTP surface.

use serde::{Deserialize, Serialize};

/// Image upload and recognition response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognized_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
}

/// Text refinement request.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RefineRequest {
    pub original_text: String,
    pub refinement_instruction: String,
}

/// Text refinement response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RefineResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refined_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
}

/// Form-based tuning request (legacy refinement path).
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TuneRequest {
    pub text: String,
    pub instruction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TuneResponse {
    pub success: bool,
    pub tuned_text: String,
    pub original_instruction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub message: String,
}
