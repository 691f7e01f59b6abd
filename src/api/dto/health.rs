//! DTOs for service info and health endpoints.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub urls_count: usize,
}

/// Service banner returned from `/`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}
