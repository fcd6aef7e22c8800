//! Logistic Regression Model
//!
//! Weights exported from the training pipeline as JSON:
//!
//! ```json
//! {
//!   "format": "logistic-regression",
//!   "name": "url-phishing-lr",
//!   "feature_version": 1,
//!   "layout_hash": 3386973283,
//!   "feature_names": ["url_length", "..."],
//!   "weights": [1.2, "..."],
//!   "intercept": -2.5
//! }
//! ```
//!
//! Inference is a dot product, so `predict` needs no locking.

use serde::Deserialize;

use super::error::ModelLoadError;
use super::inference::{InferenceError, Model, ModelFormat, ModelMetadata, ModelOutput};

/// Class index predicted when the decision value is positive
pub const POSITIVE_CLASS: i64 = 1;

/// On-disk artifact
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearArtifact {
    pub format: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub feature_version: Option<u8>,
    #[serde(default)]
    pub layout_hash: Option<u32>,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub weights: Vec<f32>,
    pub intercept: f32,
}

/// Loaded logistic-regression classifier
#[derive(Debug, Clone)]
pub struct LinearModel {
    weights: Vec<f32>,
    intercept: f32,
    metadata: ModelMetadata,
}

impl LinearModel {
    /// Build from in-memory weights (tests, embedded models)
    pub fn new(name: &str, weights: Vec<f32>, intercept: f32) -> Result<Self, ModelLoadError> {
        let artifact = LinearArtifact {
            format: ModelFormat::LogisticRegression.as_str().to_string(),
            name: Some(name.to_string()),
            feature_version: None,
            layout_hash: None,
            feature_names: None,
            weights,
            intercept,
        };
        Self::from_artifact(artifact, "<memory>", String::new())
    }

    /// Parse an artifact's bytes
    pub fn from_bytes(bytes: &[u8], source: &str, sha256: String) -> Result<Self, ModelLoadError> {
        let artifact: LinearArtifact = serde_json::from_slice(bytes)
            .map_err(|e| ModelLoadError::Parse(format!("{source}: {e}")))?;
        Self::from_artifact(artifact, source, sha256)
    }

    pub fn from_artifact(
        artifact: LinearArtifact,
        source: &str,
        sha256: String,
    ) -> Result<Self, ModelLoadError> {
        if artifact.format != ModelFormat::LogisticRegression.as_str() {
            return Err(ModelLoadError::UnsupportedFormat(artifact.format));
        }

        if artifact.weights.is_empty() {
            return Err(ModelLoadError::Invalid("model has no weights".to_string()));
        }

        if artifact.weights.iter().any(|w| !w.is_finite()) || !artifact.intercept.is_finite() {
            return Err(ModelLoadError::Invalid("model has non-finite parameters".to_string()));
        }

        if let Some(names) = &artifact.feature_names {
            if names.len() != artifact.weights.len() {
                return Err(ModelLoadError::Invalid(format!(
                    "{} feature names for {} weights",
                    names.len(),
                    artifact.weights.len()
                )));
            }
        }

        if artifact.feature_version.is_some() != artifact.layout_hash.is_some() {
            return Err(ModelLoadError::Invalid(
                "feature_version and layout_hash must be given together".to_string(),
            ));
        }

        let metadata = ModelMetadata {
            name: artifact.name.unwrap_or_else(|| "logistic-regression".to_string()),
            format: ModelFormat::LogisticRegression,
            source: source.to_string(),
            input_dim: artifact.weights.len(),
            feature_version: artifact.feature_version,
            layout_hash: artifact.layout_hash,
            feature_names: artifact.feature_names,
            sha256,
            loaded_at: chrono::Utc::now(),
        };

        Ok(Self {
            weights: artifact.weights,
            intercept: artifact.intercept,
            metadata,
        })
    }

    /// Decision value `w·x + b`
    pub fn decision_function(&self, features: &[f32]) -> f64 {
        self.weights
            .iter()
            .zip(features)
            .map(|(w, x)| *w as f64 * *x as f64)
            .sum::<f64>()
            + self.intercept as f64
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Model for LinearModel {
    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn predict(&self, features: &[f32]) -> Result<ModelOutput, InferenceError> {
        if features.len() != self.weights.len() {
            return Err(InferenceError(format!(
                "expected {} features, got {}",
                self.weights.len(),
                features.len()
            )));
        }

        let z = self.decision_function(features);
        let positive = sigmoid(z);

        Ok(ModelOutput {
            class: if z > 0.0 { POSITIVE_CLASS } else { 0 },
            probabilities: vec![(1.0 - positive) as f32, positive as f32],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_positive_and_negative() {
        let model = LinearModel::new("t", vec![2.0, -1.0], 0.0).unwrap();

        let pos = model.predict(&[1.0, 0.0]).unwrap();
        assert_eq!(pos.class, 1);
        assert!(pos.probabilities[1] > 0.5);

        let neg = model.predict(&[0.0, 1.0]).unwrap();
        assert_eq!(neg.class, 0);
        assert!(neg.probabilities[0] > 0.5);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = LinearModel::new("t", vec![0.3, 0.7, -0.2], 0.1).unwrap();
        let out = model.predict(&[0.5, 0.25, 1.0]).unwrap();
        let sum: f32 = out.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_decision_is_negative_class() {
        let model = LinearModel::new("t", vec![1.0], 0.0).unwrap();
        let out = model.predict(&[0.0]).unwrap();
        assert_eq!(out.class, 0);
        assert_eq!(out.probabilities, vec![0.5, 0.5]);
    }

    #[test]
    fn test_wrong_length_is_inference_error() {
        let model = LinearModel::new("t", vec![1.0, 1.0], 0.0).unwrap();
        assert!(model.predict(&[1.0]).is_err());
    }

    #[test]
    fn test_from_bytes() {
        let json = br#"{
            "format": "logistic-regression",
            "name": "tiny",
            "weights": [1.0, 2.0],
            "intercept": -0.5
        }"#;
        let model = LinearModel::from_bytes(json, "tiny.json", "abc".to_string()).unwrap();
        assert_eq!(model.input_dim(), 2);
        assert_eq!(model.name(), "tiny");
        assert_eq!(model.metadata().sha256, "abc");
        assert_eq!(model.metadata().declared_layout(), None);
    }

    #[test]
    fn test_rejects_bad_artifacts() {
        let cases: &[&[u8]] = &[
            br#"{"format": "svm", "weights": [1.0], "intercept": 0.0}"#,
            br#"{"format": "logistic-regression", "weights": [], "intercept": 0.0}"#,
            br#"{"format": "logistic-regression", "weights": [1.0], "intercept": 0.0, "feature_names": ["a", "b"]}"#,
            br#"{"format": "logistic-regression", "weights": [1.0], "intercept": 0.0, "layout_hash": 5}"#,
            br#"{"format": "logistic-regression", "weights": [1.0], "intercept": 0.0, "extra": true}"#,
            br#"not json"#,
        ];
        for bytes in cases {
            assert!(
                LinearModel::from_bytes(bytes, "bad.json", String::new()).is_err(),
                "{}",
                String::from_utf8_lossy(bytes)
            );
        }
    }
}
