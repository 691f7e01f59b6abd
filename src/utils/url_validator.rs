//! Syntactic pre-check for redirect targets.
//!
//! Targets are stored exactly as submitted, so two submissions deduplicate only
//! when their strings are identical.

use url::Url;

/// Errors that can occur while checking a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// Rejects potentially dangerous schemes like `javascript:`, `data:` or
/// `file:`.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`UrlValidationError::MissingHost`] when no host is present.
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_target_url("https://example.com").is_ok());
        assert!(validate_target_url("http://example.com/path?q=1#frag").is_ok());
    }

    #[test]
    fn test_accepts_ports_and_ip_hosts() {
        assert!(validate_target_url("http://127.0.0.1:8080/").is_ok());
        assert!(validate_target_url("http://[::1]:3000/x").is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            validate_target_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in [
            "javascript:alert(1)",
            "data:text/html,hi",
            "file:///etc/passwd",
            "ftp://example.com",
        ] {
            assert!(
                matches!(
                    validate_target_url(input),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(validate_target_url("").is_err());
    }
}
