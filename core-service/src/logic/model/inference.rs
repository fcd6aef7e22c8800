//! Inference - the Model seam
//!
//! A model is loaded once, then only read. Implementations take `&self` and
//! must be safe to call from many request threads at once.

use serde::{Deserialize, Serialize};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Serialized artifact kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelFormat {
    /// JSON logistic-regression weights
    LogisticRegression,
    /// ONNX graph run through ONNX Runtime
    Onnx,
}

impl ModelFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFormat::LogisticRegression => "logistic-regression",
            ModelFormat::Onnx => "onnx",
        }
    }
}

impl std::fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub name: String,
    pub format: ModelFormat,
    /// File the model was read from, or `<memory>`
    pub source: String,
    /// Number of features the model was trained on
    pub input_dim: usize,
    /// Feature layout the artifact declares, if any
    pub feature_version: Option<u8>,
    pub layout_hash: Option<u32>,
    pub feature_names: Option<Vec<String>>,
    /// Hex SHA-256 of the artifact bytes
    pub sha256: String,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

impl ModelMetadata {
    /// Declared (version, hash) pair, when the artifact carries both
    pub fn declared_layout(&self) -> Option<(u8, u32)> {
        self.feature_version.zip(self.layout_hash)
    }
}

/// Raw model output for one feature vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    /// Predicted class index
    pub class: i64,
    /// Per-class probability distribution, indexed by class
    pub probabilities: Vec<f32>,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("InferenceError: {0}")]
pub struct InferenceError(pub String);

// ============================================================================
// MODEL TRAIT
// ============================================================================

/// Trait for loaded classifiers (logistic regression, ONNX, test doubles)
pub trait Model: Send + Sync {
    fn metadata(&self) -> &ModelMetadata;

    /// Run the decision function on one feature vector
    fn predict(&self, features: &[f32]) -> Result<ModelOutput, InferenceError>;

    fn input_dim(&self) -> usize {
        self.metadata().input_dim
    }

    fn name(&self) -> &str {
        &self.metadata().name
    }
}
