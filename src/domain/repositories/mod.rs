//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; the implementation lives in
//! `crate::infrastructure::registry`. Mock implementations are generated via
//! `mockall` for service tests.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
