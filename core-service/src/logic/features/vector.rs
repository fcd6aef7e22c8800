//! Feature Vector - Core data structure for ML input
//!
//! **Versioned feature vector with layout metadata**
//!
//! Values are stored as a plain `Vec<f32>` rather than a fixed array so that
//! a vector produced under another layout can still be represented and
//! rejected at the scoring boundary instead of being padded into shape.

use serde::{Deserialize, Serialize};
use super::layout::{
    FEATURE_COUNT, FEATURE_VERSION, FEATURE_LAYOUT,
    layout_hash,
};

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Versioned Feature Vector with layout metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    pub values: Vec<f32>,
}

impl FeatureVector {
    /// Create a new zeroed feature vector with current version
    pub fn new() -> Self {
        Self::from_values(vec![0.0; FEATURE_COUNT])
    }

    /// Create from raw values stamped with the current layout.
    ///
    /// The length is NOT checked here; the scoring service owns that check.
    pub fn from_values(values: Vec<f32>) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Create with an explicit layout stamp (replayed or foreign vectors)
    pub fn with_layout(version: u8, layout_hash: u32, values: Vec<f32>) -> Self {
        Self {
            version,
            layout_hash,
            values,
        }
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Set feature by index
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    /// Set feature by name
    pub fn set_by_name(&mut self, name: &str, value: f32) -> bool {
        if let Some(index) = super::layout::feature_index(name) {
            self.set(index, value);
            true
        } else {
            false
        }
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "values": self.values,
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<std::collections::BTreeMap<_, _>>(),
        })
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FEATURE EXTRACTOR TRAIT
// ============================================================================

/// Trait for feature groups
pub trait FeatureExtractor {
    /// Write this group's features into the vector
    fn extract(&self, vector: &mut FeatureVector);
}

// ============================================================================
// TESTS
// ============================================================================
