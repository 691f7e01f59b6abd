//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, redirects and analytics

pub mod services;
