//! # Shortcode Registry
//!
//! An in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Records, click events, clock and the repository trait
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The thread-safe in-memory registry
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or custom shortcodes with a per-link validity window
//! - Deduplication of active links by original URL
//! - Per-click history with IP address and user agent
//! - Bulk creation, listing and deletion
//!
//! All state lives in process memory and is lost on restart.
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8000"   # Optional
//! cargo run -- --listen 127.0.0.1:8000
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CreateLink, LinkService};
    pub use crate::domain::entities::{ClickEvent, NewUrlRecord, UrlRecord, UrlStats};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::domain::{Clock, RegistryError, SystemClock};
    pub use crate::error::AppError;
    pub use crate::infrastructure::{Registry, RegistryConfig};
    pub use crate::state::AppState;
}
