//! Host & Scheme Feature Extraction

use once_cell::sync::Lazy;
use regex::Regex;

use super::lexicon::{SUSPICIOUS_TLDS, UNCOMMON_TLDS, URL_SHORTENERS};
use super::parsed::ParsedUrl;
use super::vector::{FeatureExtractor, FeatureVector};

/// Any `:<digits>` in the submitted text
static PORT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r":[0-9]+").expect("valid port regex"));

/// Score for a TLD in `SUSPICIOUS_TLDS`
pub const SUSPICIOUS_TLD_SCORE: f32 = 1.0;
/// Score for a TLD in `UNCOMMON_TLDS`
pub const UNCOMMON_TLD_SCORE: f32 = 0.6;
/// Score when the URL is not submitted as https
pub const INSECURE_SCHEME_SCORE: f32 = 0.8;

/// Host & scheme features from a parsed URL
#[derive(Debug, Clone, Default)]
pub struct HostFeatures {
    pub is_ip: bool,
    pub has_port: bool,
    pub is_https: bool,
    pub tld_score: f32,
    pub dash_count: usize,
    pub is_shortener: bool,
}

impl HostFeatures {
    pub fn from_url(url: &ParsedUrl) -> Self {
        let host = url.host.as_str();

        let tld_score = if SUSPICIOUS_TLDS.iter().any(|tld| host.ends_with(tld)) {
            SUSPICIOUS_TLD_SCORE
        } else if UNCOMMON_TLDS.iter().any(|tld| host.ends_with(tld)) {
            UNCOMMON_TLD_SCORE
        } else {
            0.0
        };

        Self {
            is_ip: url.is_ip,
            has_port: PORT_PATTERN.is_match(&url.raw),
            is_https: url.lower.starts_with("https://"),
            tld_score,
            dash_count: host.matches('-').count(),
            is_shortener: URL_SHORTENERS.iter().any(|s| host.contains(s)),
        }
    }

    pub fn dash_score(&self) -> f32 {
        (self.dash_count as f32 / 3.0).min(1.0)
    }
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

impl FeatureExtractor for HostFeatures {
    fn extract(&self, vector: &mut FeatureVector) {
        vector.set_by_name("suspicious_tld", self.tld_score);
        vector.set_by_name("ip_host", flag(self.is_ip));
        vector.set_by_name("explicit_port", flag(self.has_port));
        vector.set_by_name(
            "insecure_scheme",
            if self.is_https { 0.0 } else { INSECURE_SCHEME_SCORE },
        );
        vector.set_by_name("url_shortener", flag(self.is_shortener));
        vector.set_by_name("dash_count", self.dash_score());
    }
}
