//! Content Feature Extraction
//!
//! Lexicon hits in the URL, its path, and its host.

use once_cell::sync::Lazy;
use regex::Regex;

use super::lexicon::{PHISHING_KEYWORDS, REDIRECT_WORDS, SUSPICIOUS_PATHS, THROWAWAY_DOMAIN_WORDS};
use super::parsed::ParsedUrl;
use super::vector::{FeatureExtractor, FeatureVector};

/// Year-like run of digits in a host (newsite2024.com)
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}").expect("valid year regex"));

/// Throwaway-domain score weights
pub mod pattern_weights {
    pub const YEAR: f32 = 0.7;
    pub const WORD: f32 = 0.5;
    pub const WORDS_MAX: f32 = 1.0;
    pub const LONG_HOST: f32 = 0.5;
    pub const LONG_HOST_CHARS: usize = 15;
    pub const ALNUM_MIX: f32 = 0.4;
    pub const ALNUM_MIX_CHARS: usize = 8;
    pub const MULTI_DASH: f32 = 0.6;
}

/// Content features from a parsed URL
#[derive(Debug, Clone, Default)]
pub struct ContentFeatures {
    pub keyword_hits: usize,
    pub has_redirect: bool,
    pub has_suspicious_path: bool,
    pub domain_pattern_score: f32,
}

impl ContentFeatures {
    pub fn from_url(url: &ParsedUrl) -> Self {
        Self {
            keyword_hits: PHISHING_KEYWORDS.iter().filter(|k| url.lower.contains(*k)).count(),
            has_redirect: REDIRECT_WORDS.iter().any(|w| url.path.contains(w)),
            has_suspicious_path: SUSPICIOUS_PATHS.iter().any(|p| url.path.contains(p)),
            domain_pattern_score: domain_pattern_score(&url.host),
        }
    }

    pub fn keyword_score(&self) -> f32 {
        (self.keyword_hits as f32 / 3.0).min(1.0)
    }
}

impl FeatureExtractor for ContentFeatures {
    fn extract(&self, vector: &mut FeatureVector) {
        vector.set_by_name("phishing_keywords", self.keyword_score());
        vector.set_by_name("redirect_tokens", if self.has_redirect { 1.0 } else { 0.0 });
        vector.set_by_name("suspicious_path", if self.has_suspicious_path { 1.0 } else { 0.0 });
        vector.set_by_name("suspicious_domain_pattern", self.domain_pattern_score);
    }
}

/// Additive score for hosts that look freshly registered or throwaway.
pub fn domain_pattern_score(host: &str) -> f32 {
    use self::pattern_weights::*;

    let mut score = 0.0f32;

    if YEAR_PATTERN.is_match(host) {
        score += YEAR;
    }

    let words = THROWAWAY_DOMAIN_WORDS.iter().filter(|w| host.contains(*w)).count();
    score += (words as f32 * WORD).min(WORDS_MAX);

    let host_chars = host.chars().count();
    if host_chars > LONG_HOST_CHARS {
        score += LONG_HOST;
    }

    let has_digit = host.chars().any(|c| c.is_ascii_digit());
    let has_alpha = host.chars().any(|c| c.is_ascii_lowercase());
    if has_digit && has_alpha && host_chars > ALNUM_MIX_CHARS {
        score += ALNUM_MIX;
    }

    if host.matches('-').count() >= 2 {
        score += MULTI_DASH;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(url: &str) -> ContentFeatures {
        ContentFeatures::from_url(&ParsedUrl::parse(url).unwrap())
    }

    #[test]
    fn test_keyword_score() {
        assert_eq!(content("https://example.org/").keyword_hits, 0);
        // "google" is itself a keyword
        assert_eq!(content("http://google.com").keyword_hits, 1);
        let c = content("http://verify-account-login.example/urgent");
        assert!(c.keyword_hits >= 3);
        assert_eq!(c.keyword_score(), 1.0);
    }

    #[test]
    fn test_path_tokens() {
        assert!(content("https://example.com/redirect?to=x").has_redirect);
        assert!(content("https://example.com/wp-admin/login.php").has_suspicious_path);
        assert!(!content("https://example.com/docs").has_redirect);
        assert!(!content("https://example.com/docs").has_suspicious_path);
    }

    #[test]
    fn test_domain_pattern_score() {
        assert_eq!(domain_pattern_score("google.com"), 0.0);
        // year + long host + digits/letters mix, capped
        assert_eq!(domain_pattern_score("newsite2024.example.com"), 1.0);
        // one word only ("web")
        assert_eq!(domain_pattern_score("webmd.com"), 0.5);
    }
}
