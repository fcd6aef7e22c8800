//! URL prediction handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use scam_detect_core::ClassificationResult;

use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub result: &'static str,
    pub confidence: f64,
}

impl From<ClassificationResult> for PredictResponse {
    fn from(result: ClassificationResult) -> Self {
        Self {
            result: result.label.display_name(),
            confidence: result.confidence,
        }
    }
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected predict body: {}", rejection.body_text());
        AppError::ValidationError(rejection.body_text())
    })?;

    let url = match request.url {
        Some(url) if !url.trim().is_empty() => url,
        _ => return Err(AppError::NoUrl),
    };

    tracing::debug!(url = %url, "Predict request");

    // Extraction and inference are CPU-bound
    let service = state.service.clone();
    let result = tokio::task::spawn_blocking(move || service.predict_url(&url))
        .await
        .map_err(|e| AppError::InternalError(format!("Scoring task failed: {}", e)))??;

    tracing::info!(
        label = %result.label,
        confidence = result.confidence,
        "URL classified"
    );

    Ok(Json(result.into()))
}
