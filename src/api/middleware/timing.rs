//! Processing-time header middleware.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Response header carrying the handler time in seconds.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Measures request handling time, logs it and exposes it as
/// `X-Process-Time` (fractional seconds).
///
/// The request line and headers are logged at `DEBUG` before the handler
/// runs.
pub async fn process_time(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    tracing::debug!(
        method = %method,
        uri = %req.uri(),
        headers = ?req.headers(),
        "Request started"
    );

    let mut response = next.run(req).await;

    let elapsed = start.elapsed().as_secs_f64();

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        "Request completed in {:.4}s",
        elapsed
    );

    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed:.6}")) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(PROCESS_TIME_HEADER), value);
    }

    response
}
