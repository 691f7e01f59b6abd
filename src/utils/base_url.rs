//! Base URL resolution for building short links.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

/// Header set by reverse proxies that terminate TLS.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Resolves the base that short URLs are built on.
///
/// A configured base wins. Otherwise the base is rebuilt from the request:
/// scheme from `X-Forwarded-Proto` (`http` unless it says `https`) and
/// authority from the `Host` header, port included.
///
/// Trailing slashes are stripped so `base + "/" + code` never doubles them.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base is configured and the `Host`
/// header is missing, not valid UTF-8, or empty.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:8000".parse().unwrap());
///
/// let base = resolve_base_url(None, &headers).unwrap();
/// assert_eq!(base, "http://localhost:8000");
/// ```
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> Result<String, AppError> {
    if let Some(base) = configured {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request("Invalid Host header", json!({})));
    }

    let scheme = match headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
    {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    Ok(format!("{}://{}", scheme, host.trim_end_matches('/')))
}
