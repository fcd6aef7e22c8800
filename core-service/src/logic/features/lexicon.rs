//! Lexicon - word lists the lexical features match against
//!
//! These lists are part of the feature contract: editing one changes the
//! values a trained model sees, so bump `FEATURE_VERSION` alongside.

/// Words typical of credential-harvesting URLs
pub const PHISHING_KEYWORDS: &[&str] = &[
    "verify", "confirm", "account", "suspended", "locked", "security", "update",
    "validate", "authenticate", "urgent", "immediate", "click", "signin", "login",
    "bank", "paypal", "amazon", "apple", "microsoft", "google", "facebook",
    "secure", "ssl", "protection", "winner", "prize", "claim", "free", "bonus",
];

/// TLDs heavily abused by throwaway phishing domains
pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".tk", ".ml", ".ga", ".cf", ".pw", ".top", ".click", ".download", ".stream",
    ".science", ".racing", ".party", ".gq", ".loan", ".men", ".trade", ".date",
];

/// Less common TLDs, weighted lower than `SUSPICIOUS_TLDS`
pub const UNCOMMON_TLDS: &[&str] = &[".info", ".biz", ".online", ".website", ".net"];

/// Domains used as typosquatting targets
pub const WELL_KNOWN_DOMAINS: &[&str] = &[
    "google.com", "youtube.com", "facebook.com", "wikipedia.org", "twitter.com",
    "amazon.com", "instagram.com", "linkedin.com", "netflix.com", "ebay.com",
    "apple.com", "microsoft.com", "github.com", "stackoverflow.com", "reddit.com",
    "gmail.com", "yahoo.com", "outlook.com", "dropbox.com", "adobe.com",
    "openai.com", "chatgpt.com", "x.com", "medium.com", "techcrunch.com",
    "forbes.com", "cnn.com", "bbc.com", "nytimes.com", "gov.sg", "imda.gov.sg",
];

/// Brand names commonly impersonated
pub const BRAND_NAMES: &[&str] = &[
    "google", "facebook", "amazon", "apple", "microsoft", "paypal", "ebay",
    "netflix", "spotify", "instagram", "twitter", "linkedin", "github",
    "dropbox", "adobe", "samsung", "sony", "nike", "mcdonalds", "walmart",
];

/// Path words that indicate an open redirect
pub const REDIRECT_WORDS: &[&str] = &["redirect", "goto", "link", "click", "ref"];

/// Path fragments seen on compromised or scam pages
pub const SUSPICIOUS_PATHS: &[&str] = &[
    "/wp-admin", "/admin", "/phishing", "/scam", "/fake", "/malware",
    "/virus", "/hack", "/steal", "/password", "/credit", "/bank",
];

/// Link shortener hosts
pub const URL_SHORTENERS: &[&str] = &[
    "bit.ly", "tinyurl.com", "t.co", "goo.gl", "ow.ly", "short.link",
    "tiny.cc", "is.gd", "buff.ly", "adf.ly",
];

/// Words typical of freshly registered or throwaway domains
pub const THROWAWAY_DOMAIN_WORDS: &[&str] = &[
    "new", "temp", "test", "demo", "trial", "quick", "fast", "instant",
    "secure", "safe", "verify", "check", "login", "account", "portal",
    "update", "confirm", "validation", "authentication", "site", "web",
];

/// Punctuation counted by `special_char_ratio`
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+=[]{}|;':\"\\,.<>?";
