//! Model Loader
//!
//! Reads an artifact once at startup, verifies it, and hands back a shared
//! read-only model. Every failure here is meant to stop the process.

use std::path::Path;
use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::logic::features::{layout, FEATURE_COUNT, FEATURE_LAYOUT};
use super::error::ModelLoadError;
use super::inference::{Model, ModelMetadata};
use super::linear::LinearModel;

/// Hex SHA-256 of the given bytes
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Load a model artifact from disk.
///
/// The format is picked by extension: `.json` for logistic regression,
/// `.onnx` for ONNX (only with the `onnx` feature). When `expected_sha256`
/// is set the file digest must match it.
pub fn load_model(
    path: impl AsRef<Path>,
    expected_sha256: Option<&str>,
) -> Result<Arc<dyn Model>, ModelLoadError> {
    let path = path.as_ref();
    log::info!("Loading model from: {}", path.display());

    if !path.exists() {
        return Err(ModelLoadError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let digest = sha256_hex(&bytes);
    if let Some(expected) = expected_sha256 {
        if !expected.trim().eq_ignore_ascii_case(&digest) {
            return Err(ModelLoadError::ChecksumMismatch {
                expected: expected.trim().to_lowercase(),
                actual: digest,
            });
        }
        log::info!("Model checksum verified");
    }

    let source = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let model: Arc<dyn Model> = match extension.as_deref() {
        Some("json") => Arc::new(LinearModel::from_bytes(&bytes, &source, digest)?),
        #[cfg(feature = "onnx")]
        Some("onnx") => Arc::new(super::onnx::OnnxModel::from_bytes(&bytes, &source, digest)?),
        #[cfg(not(feature = "onnx"))]
        Some("onnx") => {
            return Err(ModelLoadError::UnsupportedFormat(
                "onnx (built without the `onnx` feature)".to_string(),
            ));
        }
        other => {
            return Err(ModelLoadError::UnsupportedFormat(
                other.unwrap_or("<no extension>").to_string(),
            ));
        }
    };

    check_schema(model.metadata())?;

    let meta = model.metadata();
    log::info!(
        "Model '{}' loaded ({}, {} features, sha256 {})",
        meta.name,
        meta.format,
        meta.input_dim,
        &meta.sha256[..meta.sha256.len().min(12)]
    );

    Ok(model)
}

/// Check a loaded model against the extractor's feature layout.
pub fn check_schema(meta: &ModelMetadata) -> Result<(), ModelLoadError> {
    if meta.input_dim != FEATURE_COUNT {
        return Err(ModelLoadError::SchemaMismatch {
            model: meta.input_dim,
            extractor: FEATURE_COUNT,
        });
    }

    if let Some((version, hash)) = meta.declared_layout() {
        layout::validate_layout(version, hash)?;
    }

    if let Some(names) = &meta.feature_names {
        if let Some((i, (got, want))) = names
            .iter()
            .zip(FEATURE_LAYOUT.iter())
            .enumerate()
            .find(|(_, (got, want))| got.as_str() != **want)
        {
            return Err(ModelLoadError::Invalid(format!(
                "feature {} is '{}' in the model but '{}' in the layout",
                i, got, want
            )));
        }
    }

    Ok(())
}
