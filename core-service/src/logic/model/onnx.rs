//! ONNX Model - ONNX Runtime Integration
//!
//! Expects a classifier exported without a ZipMap node:
//! output 0 is the label (`i64`), output 1 the probabilities (`f32 [1, k]`).
//!
//! `Session::run` takes `&mut self`, so the session is kept behind a mutex
//! and inference calls are serialized.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use crate::logic::features::FEATURE_COUNT;
use super::error::ModelLoadError;
use super::inference::{InferenceError, Model, ModelFormat, ModelMetadata, ModelOutput};

pub struct OnnxModel {
    session: Mutex<Session>,
    label_output: String,
    proba_output: String,
    metadata: ModelMetadata,
}

impl OnnxModel {
    /// Load an ONNX model from bytes
    pub fn from_bytes(bytes: &[u8], source: &str, sha256: String) -> Result<Self, ModelLoadError> {
        log::info!("Loading ONNX model from memory ({} bytes)", bytes.len());

        let session = Session::builder()
            .map_err(|e| ModelLoadError::Runtime(format!("Session builder error: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelLoadError::Runtime(format!("Optimization error: {}", e)))?
            .commit_from_memory(bytes)
            .map_err(|e| ModelLoadError::Runtime(format!("Load from memory error: {}", e)))?;

        let mut output_names = session.outputs.iter().map(|o| o.name.clone());
        let label_output = output_names
            .next()
            .ok_or_else(|| ModelLoadError::Invalid("ONNX model has no outputs".to_string()))?;
        let proba_output = output_names.next().ok_or_else(|| {
            ModelLoadError::Invalid("ONNX model has no probability output".to_string())
        })?;

        let declared_dim = session
            .inputs
            .first()
            .and_then(|input| input.input_type.tensor_shape())
            .and_then(|shape| shape.last().copied());

        let input_dim = match declared_dim {
            Some(dim) if dim > 0 => dim as usize,
            _ => {
                log::warn!(
                    "ONNX input width is dynamic, assuming {} features",
                    FEATURE_COUNT
                );
                FEATURE_COUNT
            }
        };

        let metadata = ModelMetadata {
            name: std::path::Path::new(source)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("onnx")
                .to_string(),
            format: ModelFormat::Onnx,
            source: source.to_string(),
            input_dim,
            feature_version: None,
            layout_hash: None,
            feature_names: None,
            sha256,
            loaded_at: chrono::Utc::now(),
        };

        Ok(Self {
            session: Mutex::new(session),
            label_output,
            proba_output,
            metadata,
        })
    }
}

impl Model for OnnxModel {
    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn predict(&self, features: &[f32]) -> Result<ModelOutput, InferenceError> {
        let input_array = Array2::<f32>::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let label = outputs
            .get(&self.label_output)
            .ok_or_else(|| InferenceError("No label output".to_string()))?
            .try_extract_tensor::<i64>()
            .map_err(|e| InferenceError(format!("Label extract error: {}", e)))?
            .1
            .first()
            .copied()
            .ok_or_else(|| InferenceError("Empty label output".to_string()))?;

        let probabilities = outputs
            .get(&self.proba_output)
            .ok_or_else(|| InferenceError("No probability output".to_string()))?
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("Probability extract error: {}", e)))?
            .1
            .to_vec();

        Ok(ModelOutput {
            class: label,
            probabilities,
        })
    }
}
