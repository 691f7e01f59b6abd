//! Handlers for service info and health endpoints.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, RootResponse};
use crate::state::AppState;

/// Returns the service banner.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "URL Shortener Microservice".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Returns service health and the number of stored links.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "healthy", "urls_count": 3 }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        urls_count: state.link_service.count(),
    })
}
