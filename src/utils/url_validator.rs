//! URL 规范化与验证模块
//!
//! Scheme-less input gets `https://` prepended, then the result must parse
//! as an absolute URL with a host.

use url::Url;

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// URL 验证错误
#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    MissingHost,
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::MissingHost => write!(f, "URL has no host"),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// Trim the input and make sure it carries a scheme
///
/// Returns `None` for blank input. The prefix check is case-sensitive:
/// only a literal `http://` or `https://` is left alone.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("{}{}", DEFAULT_SCHEME_PREFIX, trimmed))
    }
}

/// 验证 URL 格式
///
/// The URL must parse and have an authority (host).
pub fn validate_url(url: &str) -> Result<Url, UrlValidationError> {
    if url.trim().is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if parsed.host().is_none() {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(parsed)
}
