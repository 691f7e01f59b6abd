//! API route configuration.

use crate::api::handlers::{delete_url_handler, list_urls_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Analytics and management routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /stats/{shortcode}` - Statistics and click history for a link
/// - `GET    /urls`              - Every stored link with statistics
/// - `DELETE /urls/{shortcode}`  - Delete a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/stats/{shortcode}", get(stats_handler))
        .route("/urls", get(list_urls_handler))
        .route("/urls/{shortcode}", delete(delete_url_handler))
}
