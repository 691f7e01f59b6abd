//! HTTP middleware for request processing and observability.

pub mod cors;
pub mod timing;
pub mod tracing;
