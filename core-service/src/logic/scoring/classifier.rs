//! Scoring Service
//!
//! Guards the model boundary: checks the vector against the model's shape
//! and declared layout, runs inference, and turns the class distribution
//! into a label plus confidence.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::logic::features::{self, layout, FeatureVector};
use crate::logic::model::{InferenceError, Model, ModelMetadata, ModelOutput};
use super::types::{round2, ClassificationResult, Label, PredictError, ScoringError};

// ============================================================================
// ENGINE STATUS
// ============================================================================

/// Engine status for the status endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_name: String,
    pub model_format: String,
    pub input_dim: usize,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
}

/// Latency counters. Relaxed atomics: diagnostic only.
#[derive(Debug, Default)]
struct InferenceStats {
    latency_sum_us: AtomicU64,
    count: AtomicU64,
}

impl InferenceStats {
    fn record(&self, micros: u64) {
        self.latency_sum_us.fetch_add(micros, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    fn avg_latency_ms(&self) -> f32 {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.count.load(Ordering::Relaxed);
        if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 }
    }
}

// ============================================================================
// SCORING SERVICE
// ============================================================================

/// Classifies feature vectors with a loaded model.
///
/// Only constructible from a loaded model, so there is no "unloaded" state
/// to serve from.
pub struct ScoringService {
    model: Arc<dyn Model>,
    stats: InferenceStats,
}

impl ScoringService {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self {
            model,
            stats: InferenceStats::default(),
        }
    }

    pub fn metadata(&self) -> &ModelMetadata {
        self.model.metadata()
    }

    /// Classify one feature vector.
    pub fn classify(&self, features: &FeatureVector) -> Result<ClassificationResult, ScoringError> {
        let expected = self.model.input_dim();
        if features.len() != expected {
            log::error!(
                "Shape mismatch for model '{}': expected {} features, got {} (layout v{}, hash {:08x})",
                self.model.name(),
                expected,
                features.len(),
                features.version,
                features.layout_hash
            );
            return Err(ScoringError::ShapeMismatch {
                expected,
                actual: features.len(),
            });
        }

        if let Some((version, hash)) = self.model.metadata().declared_layout() {
            layout::validate_against(version, hash, features.version, features.layout_hash)
                .map_err(|e| {
                    log::error!("Layout mismatch for model '{}': {}", self.model.name(), e);
                    ScoringError::LayoutMismatch(e)
                })?;
        }

        log::debug!("Feature vector: {}", features.to_log_entry());

        let start_time = Instant::now();
        let output = self.model.predict(features.as_slice()).map_err(|e| {
            log::error!("Inference failed for model '{}': {}", self.model.name(), e);
            ScoringError::Inference(e)
        })?;
        self.stats.record(start_time.elapsed().as_micros() as u64);

        self.interpret(output)
    }

    /// Extract features from a URL and classify them.
    pub fn predict_url(&self, url: &str) -> Result<ClassificationResult, PredictError> {
        let features = features::extract(url)?;
        Ok(self.classify(&features)?)
    }

    pub fn status(&self) -> EngineStatus {
        let meta = self.model.metadata();
        EngineStatus {
            model_name: meta.name.clone(),
            model_format: meta.format.to_string(),
            input_dim: meta.input_dim,
            avg_latency_ms: self.stats.avg_latency_ms(),
            inference_count: self.stats.count.load(Ordering::Relaxed),
        }
    }

    fn interpret(&self, output: ModelOutput) -> Result<ClassificationResult, ScoringError> {
        let probabilities = &output.probabilities;

        if probabilities.is_empty() {
            return Err(InferenceError("Model returned no probabilities".to_string()).into());
        }

        if let Some(bad) = probabilities
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0 || **p > 1.0)
        {
            log::error!(
                "Model '{}' returned invalid probability {} in {:?}",
                self.model.name(),
                bad,
                probabilities
            );
            return Err(InferenceError(format!("Invalid probability {}", bad)).into());
        }

        // First index wins ties
        let (argmax, max_probability) = probabilities
            .iter()
            .copied()
            .enumerate()
            .fold((0usize, f32::MIN), |best, (i, p)| if p > best.1 { (i, p) } else { best });

        if argmax as i64 != output.class {
            log::warn!(
                "Model '{}' predicted class {} but class {} is most probable {:?}; \
                 confidence reports the max probability",
                self.model.name(),
                output.class,
                argmax,
                probabilities
            );
        }

        let confidence = round2((max_probability as f64 * 100.0).clamp(0.0, 100.0));

        Ok(ClassificationResult {
            label: Label::from_class(output.class),
            confidence,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
