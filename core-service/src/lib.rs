//! Scam Detect Core
//!
//! URL feature extraction and phishing classification.
//!
//! ```text
//! url ──► features::extract ──► FeatureVector ──► ScoringService ──► ClassificationResult
//!                                                       ▲
//!                                     model::load_model ┘ (once, at startup)
//! ```

pub mod constants;
pub mod logic;

pub use logic::features::{extract, FeatureError, FeatureVector, LayoutInfo};
pub use logic::model::{load_model, Model, ModelLoadError, ModelMetadata};
pub use logic::scoring::{ClassificationResult, Label, PredictError, ScoringError, ScoringService};
