//! Feature Layout - Centralized URL Feature Definition
//!
//! **CRITICAL: This file controls the feature schema the model is trained on**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! Model artifacts record the version and hash they were trained against;
//! the loader refuses an artifact whose layout differs from this one.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
/// This is the SINGLE SOURCE OF TRUTH for feature layout
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Size (0-4) ===
    "url_length",                // 0: Bucketed raw URL length
    "special_char_ratio",        // 1: Punctuation count / 10
    "subdomain_count",           // 2: Labels beyond registrable domain
    "domain_length",             // 3: Host length / 50
    "path_length",               // 4: Path length / 100

    // === Lexicon (5-6) ===
    "phishing_keywords",         // 5: Phishing keyword hits / 3
    "suspicious_tld",            // 6: Abused (1.0) or uncommon (0.6) TLD

    // === Host & scheme (7-9) ===
    "ip_host",                   // 7: Host is an IP literal
    "explicit_port",             // 8: URL carries an explicit port
    "insecure_scheme",           // 9: Not served over https

    // === Impersonation (10-11) ===
    "typosquatting",             // 10: Near-miss of a well-known domain
    "brand_impersonation",       // 11: Brand name outside its own .com

    // === Shape (12-18) ===
    "entropy",                   // 12: Shannon entropy / 6
    "redirect_tokens",           // 13: Redirect words in path
    "suspicious_path",           // 14: Admin / credential path patterns
    "numeric_ratio",             // 15: Digits / length
    "url_shortener",             // 16: Known shortener host
    "mixed_case",                // 17: Upper and lower case letters
    "repeated_chars",            // 18: Same char 4+ times in a row

    // === Domain pattern (19-20) ===
    "dash_count",                // 19: Dashes in host / 3
    "suspicious_domain_pattern", // 20: Throwaway-domain score
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 21;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 hash of the feature layout version and ordered names.
/// Model artifacts carry this value to detect layout mismatches.
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when feature layout doesn't match expected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Feature layout mismatch: expected v{expected_version} (hash: {expected_hash:08x}), \
     got v{actual_version} (hash: {actual_hash:08x})"
)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

/// Validate that a layout stamp matches the current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    validate_against(FEATURE_VERSION, layout_hash(), incoming_version, incoming_hash)
}

/// Validate a layout stamp against an arbitrary expected stamp
pub fn validate_against(
    expected_version: u8,
    expected_hash: u32,
    actual_version: u8,
    actual_hash: u32,
) -> Result<(), LayoutMismatchError> {
    if expected_version != actual_version || expected_hash != actual_hash {
        return Err(LayoutMismatchError {
            expected_version,
            expected_hash,
            actual_version,
            actual_hash,
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

// ============================================================================
// TESTS
// ============================================================================
