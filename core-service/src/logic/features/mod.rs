//! Features Module - URL Feature Extraction Engine
//!
//! Turns a submitted URL into the fixed-order vector the model was trained
//! on. Each group writes its own slots by name; `layout` owns the order.

pub mod layout;
pub mod lexicon;
pub mod parsed;
pub mod size;
pub mod host;
pub mod impersonation;
pub mod shape;
pub mod content;
pub mod vector;
pub mod extractor;


// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, LayoutInfo, LayoutMismatchError};
pub use vector::{FeatureVector, FeatureExtractor};
pub use extractor::{extract, FeatureError};
