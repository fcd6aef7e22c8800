//! Scoring Types
//!
//! Core types for URL classification. No logic beyond conversions.

use serde::{Deserialize, Serialize};

use crate::logic::features::{FeatureError, LayoutMismatchError};
use crate::logic::model::InferenceError;

/// Class index the model uses for phishing
pub const PHISHING_CLASS: i64 = 1;

// ============================================================================
// LABEL
// ============================================================================

/// Binary classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Phishing,
    NotPhishing,
}

impl Label {
    pub fn from_class(class: i64) -> Self {
        if class == PHISHING_CLASS {
            Label::Phishing
        } else {
            Label::NotPhishing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Phishing => "phishing",
            Label::NotPhishing => "not_phishing",
        }
    }

    /// Text the mobile client matches on. The misspelling is part of the
    /// deployed contract.
    pub fn display_name(&self) -> &'static str {
        match self {
            Label::Phishing => "Phising",
            Label::NotPhishing => "Not Phishing",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RESULT
// ============================================================================

/// Classification result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: Label,
    /// Max class probability as a percentage, 2 decimal places
    pub confidence: f64,
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// ERRORS
// ============================================================================

/// Scoring failures. All of them are internal contract violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("Feature vector has {actual} values, model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    LayoutMismatch(#[from] LayoutMismatchError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Failures of the full URL → result pipeline
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    /// Caller's fault; safe to show
    #[error(transparent)]
    Feature(#[from] FeatureError),

    /// Server's fault; log, don't show
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
