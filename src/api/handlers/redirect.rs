//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its original URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Click Tracking
///
/// Every successful redirect records a click with the peer IP address and
/// the `User-Agent` header before the response is sent.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist or has expired.
pub async fn redirect_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let original_url =
        state
            .link_service
            .resolve(&shortcode, Some(addr.ip().to_string()), user_agent)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
