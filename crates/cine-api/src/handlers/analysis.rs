//! Scene analysis handlers.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use cine_intent::IntentError;
use cine_models::SceneAnalysis;
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::metrics;
use crate::security::{decode_image, sanitize_scene};
use crate::state::AppState;

/// Request to analyze a scene description.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeSceneRequest {
    #[validate(length(min = 1, message = "Please enter a scene."))]
    pub scene: String,
}

/// Request to analyze an image via its caption.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeImageRequest {
    /// Base64-encoded JPEG or PNG, optionally as a data URL
    #[validate(length(min = 1, message = "image_base64 is required"))]
    pub image_base64: String,
}

fn failure_kind(err: &IntentError) -> &'static str {
    if err.is_validation() {
        "validation"
    } else {
        "inference_unavailable"
    }
}

/// Analyze a scene description.
pub async fn analyze_scene(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeSceneRequest>,
) -> ApiResult<Json<SceneAnalysis>> {
    request.validate()?;

    let max_chars = state.config.max_scene_chars;
    if request.scene.chars().count() > max_chars {
        return Err(ApiError::validation(format!(
            "scene must be at most {} characters",
            max_chars
        )));
    }
    let scene = sanitize_scene(&request.scene, max_chars);

    let start = Instant::now();
    let analysis = state.analyzer.analyze(&scene).await.map_err(|e| {
        warn!(error = %e, "Scene analysis failed");
        metrics::record_analysis_failure("text", failure_kind(&e));
        ApiError::from(e)
    })?;
    metrics::record_analysis("text", &analysis, start.elapsed().as_secs_f64());

    Ok(Json(analysis))
}

/// Caption an uploaded image and analyze the caption.
pub async fn analyze_image(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeImageRequest>,
) -> ApiResult<Json<SceneAnalysis>> {
    request.validate()?;

    let image = decode_image(&request.image_base64, state.config.max_image_bytes)?;
    info!(bytes = image.len(), "Analyzing uploaded image");

    let start = Instant::now();
    let analysis = state
        .analyzer
        .analyze_image(state.ml.as_ref(), &image)
        .await
        .map_err(|e| {
            warn!(error = %e, "Image analysis failed");
            metrics::record_analysis_failure("image", failure_kind(&e));
            ApiError::from(e)
        })?;
    metrics::record_analysis("image", &analysis, start.elapsed().as_secs_f64());

    Ok(Json(analysis))
}
