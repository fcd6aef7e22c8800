//! URL Feature Extractor
//!
//! Runs every feature group over a parsed URL and assembles the vector in
//! layout order. Pure: the same URL always yields a bit-identical vector.

use super::content::ContentFeatures;
use super::host::HostFeatures;
use super::impersonation::ImpersonationFeatures;
use super::layout::FEATURE_COUNT;
use super::shape::ShapeFeatures;
use super::size::SizeFeatures;
use super::parsed::ParsedUrl;
use super::vector::{FeatureExtractor, FeatureVector};

/// Errors from feature extraction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    /// Empty URL, or one that cannot be parsed into a host
    #[error("{0}")]
    InvalidInput(String),
}

/// Extract the feature vector for a URL.
pub fn extract(url: &str) -> Result<FeatureVector, FeatureError> {
    let parsed = ParsedUrl::parse(url)?;
    Ok(extract_parsed(&parsed))
}

/// Extract the feature vector for an already parsed URL.
pub fn extract_parsed(url: &ParsedUrl) -> FeatureVector {
    let size = SizeFeatures::from_url(url);
    let host = HostFeatures::from_url(url);
    let impersonation = ImpersonationFeatures::from_url(url);
    let shape = ShapeFeatures::from_url(url);
    let content = ContentFeatures::from_url(url);

    let groups: [&dyn FeatureExtractor; 5] = [&size, &host, &impersonation, &shape, &content];

    let mut vector = FeatureVector::new();
    for group in groups {
        group.extract(&mut vector);
    }

    for value in vector.values.iter_mut() {
        if !value.is_finite() {
            *value = 0.0;
        }
    }

    debug_assert_eq!(vector.len(), FEATURE_COUNT);
    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::layout;

    #[test]
    fn test_empty_url_is_invalid() {
        assert!(matches!(extract(""), Err(FeatureError::InvalidInput(_))));
        assert!(matches!(extract(" \t"), Err(FeatureError::InvalidInput(_))));
    }

    #[test]
    fn test_vector_has_layout_length() {
        let v = extract("http://google.com").unwrap();
        assert_eq!(v.len(), FEATURE_COUNT);
        assert!(layout::validate_layout(v.version, v.layout_hash).is_ok());
    }

    #[test]
    fn test_values_are_unit_range() {
        for url in [
            "http://google.com",
            "https://paypal-security-update.pw/urgent",
            "http://192.168.1.1:8080/wp-admin/../bank/login.php?redirect=aaaaaa",
            "HTTPS://WWW.Example.COM/Path",
        ] {
            let v = extract(url).unwrap();
            for (i, value) in v.values.iter().enumerate() {
                assert!((0.0..=1.0).contains(value), "{url}: feature {i} = {value}");
            }
        }
    }
}
