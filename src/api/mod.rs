//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, CORS and timing middleware
//! - [`routes`] - `/api` route composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
