//! URL normalisation for feature extraction

use url::{Host, Url};

use super::FeatureError;

/// A submitted URL split into the parts the lexical features read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Trimmed input exactly as submitted (case preserved)
    pub raw: String,
    /// `raw` lower-cased
    pub lower: String,
    /// Lower-cased host, IPv6 literals in brackets
    pub host: String,
    /// Lower-cased path
    pub path: String,
    pub is_ip: bool,
}

impl ParsedUrl {
    /// Parse a submitted URL.
    ///
    /// Inputs not starting with `http://` or `https://` are read as
    /// `https://<input>`, the way the mobile client normalises what users
    /// paste. A URL later in the text (a redirect target) does not count.
    pub fn parse(input: &str) -> Result<Self, FeatureError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(FeatureError::InvalidInput("URL is empty".to_string()));
        }

        let lower = raw.to_lowercase();
        let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
            raw.to_string()
        } else {
            format!("https://{raw}")
        };

        let parsed = Url::parse(&candidate)
            .map_err(|e| FeatureError::InvalidInput(format!("Invalid URL '{raw}': {e}")))?;

        let (host, is_ip) = match parsed.host() {
            Some(Host::Domain(domain)) if !domain.is_empty() => (domain.to_lowercase(), false),
            Some(Host::Ipv4(addr)) => (addr.to_string(), true),
            Some(Host::Ipv6(addr)) => (format!("[{addr}]"), true),
            _ => {
                return Err(FeatureError::InvalidInput(format!("URL '{raw}' has no host")));
            }
        };

        Ok(Self {
            raw: raw.to_string(),
            lower,
            host,
            path: parsed.path().to_lowercase(),
            is_ip,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_is_added_when_missing() {
        let url = ParsedUrl::parse("Example.com/Login").unwrap();
        assert_eq!(url.raw, "Example.com/Login");
        assert_eq!(url.host, "example.com");
        assert_eq!(url.path, "/login");
        assert!(!url.is_ip);
    }

    #[test]
    fn test_scheme_is_added_when_query_holds_a_url() {
        let url = ParsedUrl::parse("example.com/login?next=http://evil.com").unwrap();
        assert_eq!(url.host, "example.com");
        assert_eq!(url.path, "/login");
        assert_eq!(url.raw, "example.com/login?next=http://evil.com");
    }

    #[test]
    fn test_scheme_prefix_is_case_insensitive() {
        let url = ParsedUrl::parse("HTTP://Example.com/x").unwrap();
        assert_eq!(url.host, "example.com");
        assert!(url.lower.starts_with("http://"));
    }

    #[test]
    fn test_other_schemes_are_not_trusted() {
        let host = ParsedUrl::parse("ftp://files.example.com/x").ok().map(|u| u.host);
        assert_ne!(host.as_deref(), Some("files.example.com"));
    }

    #[test]
    fn test_input_is_trimmed() {
        let url = ParsedUrl::parse("  https://google.com  ").unwrap();
        assert_eq!(url.raw, "https://google.com");
        assert_eq!(url.path, "/");
    }

    #[test]
    fn test_ip_hosts() {
        assert!(ParsedUrl::parse("http://192.168.0.1/admin").unwrap().is_ip);
        let v6 = ParsedUrl::parse("http://[::1]:8080/").unwrap();
        assert!(v6.is_ip);
        assert_eq!(v6.host, "[::1]");
    }

    #[test]
    fn test_empty_and_blank_rejected() {
        assert!(matches!(ParsedUrl::parse(""), Err(FeatureError::InvalidInput(_))));
        assert!(matches!(ParsedUrl::parse("   "), Err(FeatureError::InvalidInput(_))));
    }

    #[test]
    fn test_unparseable_rejected() {
        assert!(ParsedUrl::parse("http://").is_err());
        assert!(ParsedUrl::parse("https://exa mple.com").is_err());
    }
}
