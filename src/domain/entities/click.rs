//! Click entity representing a single successful resolution.

use chrono::{DateTime, Utc};

/// A click recorded when a shortcode is resolved to its target.
///
/// Client metadata is optional: redirects arriving without a peer address or
/// `User-Agent` header are still counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub timestamp: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let click = ClickEvent::new(
    ///     Utc::now(),
    ///     Some("192.168.1.1".to_string()),
    ///     Some("Mozilla/5.0".to_string()),
    /// );
    /// ```
    pub fn new(
        timestamp: DateTime<Utc>,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            ip_address,
            user_agent,
        }
    }
}
