//! Loaded model description

use axum::{extract::State, Json};
use serde::Serialize;

use scam_detect_core::logic::scoring::EngineStatus;
use scam_detect_core::{LayoutInfo, ModelMetadata};

use crate::AppState;

#[derive(Serialize)]
pub struct ModelInfoResponse {
    model: ModelMetadata,
    layout: LayoutInfo,
    engine: EngineStatus,
}

pub async fn info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    Json(ModelInfoResponse {
        model: state.service.metadata().clone(),
        layout: LayoutInfo::current(),
        engine: state.service.status(),
    })
}
