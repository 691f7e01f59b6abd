//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /`              - Service banner
//! - `GET    /health`        - Health check with link count
//! - `POST   /shorten`       - Create a short link
//! - `POST   /shorten/bulk`  - Create up to five short links
//! - `GET    /{shortcode}`   - Short link redirect (302)
//! - `/api/*`                - Statistics, listing and deletion
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured browser origins with credentials
//! - **Timing** - `X-Process-Time` response header

use crate::api;
use crate::api::handlers::{
    health_handler, redirect_handler, root_handler, shorten_bulk_handler, shorten_handler,
};
use crate::api::middleware::{cors, timing, tracing as trace};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - browser origins allowed to call the API with credentials
pub fn app_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/shorten/bulk", post(shorten_bulk_handler))
        .route("/{shortcode}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(middleware::from_fn(timing::process_time))
        .layer(cors::layer(cors_origins))
        .layer(trace::layer())
}
