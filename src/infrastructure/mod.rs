//! Infrastructure layer implementing the domain contracts.
//!
//! - [`registry`] - In-memory [`crate::domain::repositories::UrlRepository`]

pub mod registry;

pub use registry::{Registry, RegistryConfig};
