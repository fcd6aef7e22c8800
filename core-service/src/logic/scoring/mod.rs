//! Scoring Module - URL Classification
//!
//! Turns feature vectors into a label and confidence using the loaded model.

pub mod classifier;
pub mod types;

pub use classifier::{EngineStatus, ScoringService};
pub use types::{round2, ClassificationResult, Label, PredictError, ScoringError, PHISHING_CLASS};
