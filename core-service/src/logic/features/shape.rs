//! Shape Feature Extraction
//!
//! Character-level statistics over the submitted URL text.

use std::collections::HashMap;

use super::lexicon::SPECIAL_CHARS;
use super::parsed::ParsedUrl;
use super::vector::{FeatureExtractor, FeatureVector};

/// Run length at which a repeated char is flagged
pub const REPEAT_RUN: usize = 4;

/// Shape features from a parsed URL
#[derive(Debug, Clone, Default)]
pub struct ShapeFeatures {
    pub special_chars: usize,
    pub digits: usize,
    pub total_chars: usize,
    pub entropy_bits: f32,
    pub mixed_case: bool,
    pub longest_run: usize,
}

impl ShapeFeatures {
    pub fn from_url(url: &ParsedUrl) -> Self {
        let raw = url.raw.as_str();

        let has_upper = raw.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = raw.chars().any(|c| c.is_ascii_lowercase());

        Self {
            special_chars: raw.chars().filter(|c| SPECIAL_CHARS.contains(*c)).count(),
            digits: raw.chars().filter(|c| c.is_ascii_digit()).count(),
            total_chars: raw.chars().count(),
            entropy_bits: shannon_entropy(raw),
            mixed_case: has_upper && has_lower,
            longest_run: longest_run(raw),
        }
    }

    pub fn special_char_ratio(&self) -> f32 {
        (self.special_chars as f32 / 10.0).min(1.0)
    }

    pub fn entropy(&self) -> f32 {
        (self.entropy_bits / 6.0).min(1.0)
    }

    pub fn numeric_ratio(&self) -> f32 {
        if self.total_chars == 0 {
            return 0.0;
        }
        (self.digits as f32 / self.total_chars as f32).min(1.0)
    }
}

impl FeatureExtractor for ShapeFeatures {
    fn extract(&self, vector: &mut FeatureVector) {
        vector.set_by_name("special_char_ratio", self.special_char_ratio());
        vector.set_by_name("entropy", self.entropy());
        vector.set_by_name("numeric_ratio", self.numeric_ratio());
        vector.set_by_name("mixed_case", if self.mixed_case { 0.5 } else { 0.0 });
        vector.set_by_name(
            "repeated_chars",
            if self.longest_run >= REPEAT_RUN { 1.0 } else { 0.0 },
        );
    }
}

/// Shannon entropy (bits per char) of the string.
///
/// Chars are summed in sorted order so the result is bit-identical across
/// runs regardless of hash map iteration order.
pub fn shannon_entropy(text: &str) -> f32 {
    let mut freq: HashMap<char, usize> = HashMap::new();
    let mut len = 0usize;
    for c in text.chars() {
        *freq.entry(c).or_insert(0) += 1;
        len += 1;
    }
    if len == 0 {
        return 0.0;
    }

    let mut counts: Vec<(char, usize)> = freq.into_iter().collect();
    counts.sort_unstable();

    let len = len as f64;
    let entropy: f64 = counts
        .iter()
        .map(|(_, count)| {
            let p = *count as f64 / len;
            -p * p.log2()
        })
        .sum();

    entropy as f32
}

/// Length of the longest run of one repeated char.
pub fn longest_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut last: Option<char> = None;

    for c in text.chars() {
        if Some(c) == last {
            current += 1;
        } else {
            current = 1;
            last = Some(c);
        }
        longest = longest.max(current);
    }

    longest
}
