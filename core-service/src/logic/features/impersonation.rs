//! Impersonation Feature Extraction
//!
//! Typosquatting of well-known domains and brand names used outside the
//! brand's own domain.

use std::cmp::min;

use super::lexicon::{BRAND_NAMES, WELL_KNOWN_DOMAINS};
use super::parsed::ParsedUrl;
use super::vector::{FeatureExtractor, FeatureVector};

/// Max edit distance still counted as a typo of a well-known domain
pub const TYPO_MAX_DISTANCE: usize = 2;

/// Impersonation features from a parsed URL
#[derive(Debug, Clone, Default)]
pub struct ImpersonationFeatures {
    /// Well-known domain the host is a near miss of
    pub typosquat_of: Option<&'static str>,
    /// Brand named in the host outside `<brand>.com`
    pub impersonated_brand: Option<&'static str>,
}

impl ImpersonationFeatures {
    pub fn from_url(url: &ParsedUrl) -> Self {
        let host = url.host.as_str();

        let typosquat_of = WELL_KNOWN_DOMAINS
            .iter()
            .copied()
            .find(|legit| host != *legit && levenshtein_distance(host, legit) <= TYPO_MAX_DISTANCE);

        let impersonated_brand = BRAND_NAMES
            .iter()
            .copied()
            .find(|brand| host.contains(brand) && !host.contains(&format!("{brand}.com")));

        Self {
            typosquat_of,
            impersonated_brand,
        }
    }
}

impl FeatureExtractor for ImpersonationFeatures {
    fn extract(&self, vector: &mut FeatureVector) {
        vector.set_by_name("typosquatting", if self.typosquat_of.is_some() { 1.0 } else { 0.0 });
        vector.set_by_name(
            "brand_impersonation",
            if self.impersonated_brand.is_some() { 1.0 } else { 0.0 },
        );
    }
}

/// Levenshtein distance between two strings, counted in chars.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two-row dynamic programming
    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr[j + 1] = min(
                min(prev[j + 1] + 1, curr[j] + 1), // deletion, insertion
                prev[j] + cost,                    // substitution
            );
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(url: &str) -> ImpersonationFeatures {
        ImpersonationFeatures::from_url(&ParsedUrl::parse(url).unwrap())
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("google.com", "google.com"), 0);
        assert_eq!(levenshtein_distance("g00gle.com", "google.com"), 2);
    }

    #[test]
    fn test_typosquatting() {
        assert_eq!(features("http://g00gle.com").typosquat_of, Some("google.com"));
        assert_eq!(features("http://google.com").typosquat_of, None);
        assert_eq!(features("http://example.org").typosquat_of, None);
    }

    #[test]
    fn test_brand_impersonation() {
        assert_eq!(
            features("https://paypal-security-update.pw/urgent").impersonated_brand,
            Some("paypal")
        );
        assert_eq!(features("https://www.paypal.com/signin").impersonated_brand, None);
        assert_eq!(features("https://example.com").impersonated_brand, None);
    }
}
