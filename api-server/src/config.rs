//! Configuration module

use std::net::{IpAddr, SocketAddr};

use scam_detect_core::constants;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Address to bind the listener on
    pub bind_addr: String,

    /// Model artifact path
    pub model_path: String,

    /// Expected SHA-256 of the model artifact
    pub model_sha256: Option<String>,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Environment (development, production)
    pub environment: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid BIND_ADDR '{0}'")]
pub struct InvalidBindAddr(String);

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: constants::get_port(),
            bind_addr: constants::get_bind_addr(),
            model_path: constants::get_model_path(),
            model_sha256: constants::get_model_sha256(),
            request_timeout_secs: constants::get_request_timeout_secs(),
            environment: constants::get_environment(),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Socket address for the listener
    pub fn socket_addr(&self) -> Result<SocketAddr, InvalidBindAddr> {
        let ip: IpAddr = self
            .bind_addr
            .trim()
            .parse()
            .map_err(|_| InvalidBindAddr(self.bind_addr.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: constants::DEFAULT_PORT,
            bind_addr: constants::DEFAULT_BIND_ADDR.to_string(),
            model_path: constants::DEFAULT_MODEL_PATH.to_string(),
            model_sha256: None,
            request_timeout_secs: constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            environment: constants::DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}
