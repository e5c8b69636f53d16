//! ML service request/response types.

use serde::{Deserialize, Serialize};

/// Request body for the text classification endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// A single (label, score) pair as returned by the pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Request for zero-shot classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZeroShotRequest {
    pub text: String,
    /// Candidate labels to rank
    pub candidate_labels: Vec<String>,
}

/// Zero-shot result, labels ranked best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZeroShotResponse {
    pub labels: Vec<String>,
    #[serde(default)]
    pub scores: Vec<f64>,
}

/// Request for image captioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionRequest {
    /// Base64-encoded image bytes (JPEG or PNG)
    pub image_base64: String,
}

/// Caption generated for an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionResponse {
    pub caption: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}
