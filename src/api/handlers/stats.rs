//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::UrlStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{shortcode}`
///
/// # Response
///
/// Link metadata, click count, `is_expired` computed at request time, and
/// the full click history in chronological order. Expired links are still
/// reported.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Json<UrlStatsResponse>, AppError> {
    let stats = state.link_service.stats(&shortcode)?;

    Ok(Json(UrlStatsResponse::from(stats)))
}
