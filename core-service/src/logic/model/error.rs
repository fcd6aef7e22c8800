//! Model loading errors. All of them are fatal at startup.

use std::path::PathBuf;

use crate::logic::features::LayoutMismatchError;

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("Model not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read model {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Model checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Failed to parse model: {0}")]
    Parse(String),

    #[error("Invalid model: {0}")]
    Invalid(String),

    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("Model expects {model} features but the extractor produces {extractor}")]
    SchemaMismatch { model: usize, extractor: usize },

    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),

    #[error("Model runtime error: {0}")]
    Runtime(String),
}
