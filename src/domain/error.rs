//! Error taxonomy of the shortcode registry.

/// Typed failures returned by [`crate::domain::repositories::UrlRepository`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Custom shortcode violates the length, character or reserved-word rules.
    #[error("Invalid shortcode: {reason}")]
    InvalidShortcode { reason: String },

    /// Custom shortcode is already taken by a record, expired or not.
    #[error("Custom shortcode already exists: {0}")]
    DuplicateShortcode(String),

    /// Shortcode is absent, or expired when resolving.
    #[error("Shortcode not found: {0}")]
    NotFound(String),

    /// Validity window cannot be represented as a timestamp.
    #[error("Validity of {minutes} minutes is out of range")]
    InvalidValidity { minutes: i64 },

    /// No free random shortcode was found within the retry budget.
    #[error("Failed to generate a unique shortcode after {attempts} attempts")]
    ResourceExhausted { attempts: usize },
}

impl RegistryError {
    pub fn invalid_shortcode(reason: impl Into<String>) -> Self {
        Self::InvalidShortcode {
            reason: reason.into(),
        }
    }
}
