//! Central Configuration Constants
//!
//! Single source of truth for the service defaults.
//! The API server reads these as fallbacks when no environment variable is set.

/// Default model artifact, relative to the working directory
pub const DEFAULT_MODEL_PATH: &str = "models/phishing_model.json";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Default per-request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default deployment environment
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Scam Detect";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model artifact path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("MODEL_PATH")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string())
}

/// Get the expected model checksum, if one is pinned
pub fn get_model_sha256() -> Option<String> {
    std::env::var("MODEL_SHA256")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Get listen port from environment or use default
pub fn get_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Get bind address from environment or use default
pub fn get_bind_addr() -> String {
    std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

/// Get request timeout from environment or use default
pub fn get_request_timeout_secs() -> u64 {
    std::env::var("REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
}

/// Get deployment environment or use default
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT")
        .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
}
