//! Model Module - Classifier Inference Engine
//!
//! Loading is kept apart from scoring: the loader produces an
//! `Arc<dyn Model>` once at startup, and the scoring service only reads it.

pub mod error;
pub mod inference;
pub mod linear;
pub mod loader;
#[cfg(feature = "onnx")]
pub mod onnx;

// Re-export common types
pub use error::ModelLoadError;
pub use inference::{InferenceError, Model, ModelFormat, ModelMetadata, ModelOutput};
pub use linear::LinearModel;
pub use loader::{load_model, sha256_hex};
#[cfg(feature = "onnx")]
pub use onnx::OnnxModel;
