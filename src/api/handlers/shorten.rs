//! Handlers for link shortening endpoints.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::HeaderMap};

use crate::api::dto::shorten::{UrlCreate, UrlResponse};
use crate::application::services::CreateLink;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::resolve_base_url;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "custom_shortcode": "promo1",   // optional
///   "validity_minutes": 30          // optional
/// }
/// ```
///
/// Submitting a URL that already has an active short link returns that link
/// unchanged.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, validation fails, or
/// the custom shortcode is taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UrlCreate>, JsonRejection>,
) -> Result<Json<UrlResponse>, AppError> {
    let Json(payload) = payload?;
    let request = CreateLink::try_from(payload)?;

    let base_url = resolve_base_url(state.base_url.as_deref(), &headers)?;

    let record = state.link_service.create_short_link(request, &base_url)?;

    Ok(Json(UrlResponse::from(record)))
}

/// Creates several short URLs at once.
///
/// # Endpoint
///
/// `POST /shorten/bulk`
///
/// # Batch Processing
///
/// Accepts a JSON array of 1 to 5 items shaped like the `/shorten` body.
/// Each item runs the same field validation as `/shorten`. Items are
/// processed independently; failed items are skipped and only the created
/// links are returned.
///
/// # Errors
///
/// Returns 400 Bad Request if the batch is empty, too large, or no item
/// could be created.
pub async fn shorten_bulk_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Vec<UrlCreate>>, JsonRejection>,
) -> Result<Json<Vec<UrlResponse>>, AppError> {
    let Json(payload) = payload?;
    let base_url = resolve_base_url(state.base_url.as_deref(), &headers)?;

    let records = state.link_service.create_bulk(payload, &base_url)?;

    Ok(Json(records.into_iter().map(UrlResponse::from).collect()))
}
