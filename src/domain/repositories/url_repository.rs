//! Repository trait for shortcode registry access.

use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats};
use crate::domain::error::RegistryError;

/// Contract of the shortcode registry.
///
/// Every method is atomic with respect to every other method on the same
/// instance: a caller never observes a record present in one index and absent
/// from the other, or a click counted but not yet appended to the history.
///
/// # Implementations
///
/// - [`crate::infrastructure::registry::Registry`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UrlRepository: Send + Sync {
    /// Creates a short URL record, or returns the active record already
    /// registered for the same `original_url`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidShortcode`] if the custom code is malformed
    /// - [`RegistryError::DuplicateShortcode`] if the custom code is taken
    /// - [`RegistryError::InvalidValidity`] if the expiry overflows
    /// - [`RegistryError::ResourceExhausted`] if no random code is free
    fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, RegistryError>;

    /// Resolves a shortcode to its target and records a click.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the shortcode is absent or expired.
    fn resolve(
        &self,
        shortcode: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<String, RegistryError>;

    /// Returns statistics for a shortcode, including expired ones.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the shortcode is absent.
    fn stats(&self, shortcode: &str) -> Result<UrlStats, RegistryError>;

    /// Returns statistics for every stored record in insertion order.
    fn list_all(&self) -> Vec<UrlStats>;

    /// Removes a record from both indexes.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the shortcode is absent.
    fn delete(&self, shortcode: &str) -> Result<(), RegistryError>;

    /// Number of stored records, expired ones included.
    fn count(&self) -> usize;
}
