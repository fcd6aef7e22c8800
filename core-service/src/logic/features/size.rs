//! Size Feature Extraction
//!
//! Length-based features of the URL and its parts.

use super::parsed::ParsedUrl;
use super::vector::{FeatureExtractor, FeatureVector};

/// Upper bounds of the URL length buckets
pub const URL_LENGTH_BUCKETS: [(usize, f32); 3] = [(30, 0.1), (54, 0.3), (75, 0.5)];

/// Size features from a parsed URL
#[derive(Debug, Clone, Default)]
pub struct SizeFeatures {
    pub url_chars: usize,
    pub host_chars: usize,
    pub path_chars: usize,
    pub host_labels: usize,
}

impl SizeFeatures {
    pub fn from_url(url: &ParsedUrl) -> Self {
        Self {
            url_chars: url.raw.chars().count(),
            host_chars: url.host.chars().count(),
            path_chars: url.path.chars().count(),
            host_labels: url.host.split('.').count(),
        }
    }

    /// Bucketed URL length; anything from 75 chars up scores 1.0
    pub fn url_length(&self) -> f32 {
        URL_LENGTH_BUCKETS
            .iter()
            .find(|(limit, _)| self.url_chars < *limit)
            .map(|(_, score)| *score)
            .unwrap_or(1.0)
    }

    pub fn subdomain_count(&self) -> f32 {
        ((self.host_labels as f32 - 2.0) / 3.0).clamp(0.0, 1.0)
    }

    pub fn domain_length(&self) -> f32 {
        (self.host_chars as f32 / 50.0).min(1.0)
    }

    pub fn path_length(&self) -> f32 {
        (self.path_chars as f32 / 100.0).min(1.0)
    }
}

impl FeatureExtractor for SizeFeatures {
    fn extract(&self, vector: &mut FeatureVector) {
        vector.set_by_name("url_length", self.url_length());
        vector.set_by_name("subdomain_count", self.subdomain_count());
        vector.set_by_name("domain_length", self.domain_length());
        vector.set_by_name("path_length", self.path_length());
    }
}
