//! Handlers for link listing and deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::{MessageResponse, UrlListResponse, UrlStatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link, expired ones included, in creation order.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn list_urls_handler(State(state): State<AppState>) -> Json<UrlListResponse> {
    let urls = state
        .link_service
        .list_all()
        .into_iter()
        .map(UrlStatsResponse::from)
        .collect();

    Json(UrlListResponse { urls })
}

/// Deletes a short link.
///
/// The original URL becomes free to be shortened again under a new code.
///
/// # Endpoint
///
/// `DELETE /api/urls/{shortcode}`
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete(&shortcode)?;

    Ok(Json(MessageResponse {
        message: "Short URL deleted successfully".to_string(),
    }))
}
