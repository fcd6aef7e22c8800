//! Logic Module - Feature Extraction & Scoring
//!
//! - `features/` - URL feature extraction against a versioned layout
//! - `model/` - model artifacts and inference
//! - `scoring/` - shape checks, inference, label and confidence

pub mod features;
pub mod model;
pub mod scoring;
