//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use scam_detect_core::{FeatureError, PredictError, ScoringError};

pub type AppResult<T> = Result<T, AppError>;

/// Message for a request without a usable `url`
pub const NO_URL_MESSAGE: &str = "No URL provided";

#[derive(Debug)]
pub enum AppError {
    // Request errors
    NoUrl,
    ValidationError(String),
    NotFound(String),
    Timeout,

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NoUrl => (StatusCode::BAD_REQUEST, NO_URL_MESSAGE),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::Timeout => (StatusCode::REQUEST_TIMEOUT, "Request timed out"),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<FeatureError> for AppError {
    fn from(err: FeatureError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<ScoringError> for AppError {
    fn from(err: ScoringError) -> Self {
        AppError::InternalError(format!("Scoring failed: {}", err))
    }
}

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Feature(e) => e.into(),
            PredictError::Scoring(e) => e.into(),
        }
    }
}
