//! URL record entity and its read-only statistics projection.

use chrono::{DateTime, Utc};

use super::click::ClickEvent;

/// A shortened URL mapping together with its click ledger.
///
/// `click_count` always equals `click_history.len()`; both are only changed
/// through [`UrlRecord::record_click`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub shortcode: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
    pub click_history: Vec<ClickEvent>,
}

impl UrlRecord {
    /// Creates a record with an empty click ledger.
    pub fn new(
        shortcode: String,
        original_url: String,
        short_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            shortcode,
            original_url,
            short_url,
            created_at,
            expires_at,
            click_count: 0,
            click_history: Vec::new(),
        }
    }

    /// Returns true if the record has reached its expiry time at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Appends a click to the ledger and bumps the counter.
    pub fn record_click(&mut self, click: ClickEvent) {
        self.click_history.push(click);
        self.click_count += 1;
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub custom_shortcode: Option<String>,
    pub validity_minutes: i64,
    pub base_url: String,
}

/// Read-only projection of a [`UrlRecord`] with expiry computed at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlStats {
    pub shortcode: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
    pub is_expired: bool,
    pub click_history: Vec<ClickEvent>,
}

impl UrlStats {
    /// Builds the projection of `record` as seen at `now`.
    pub fn from_record(record: &UrlRecord, now: DateTime<Utc>) -> Self {
        Self {
            shortcode: record.shortcode.clone(),
            original_url: record.original_url.clone(),
            short_url: record.short_url.clone(),
            created_at: record.created_at,
            expires_at: record.expires_at,
            click_count: record.click_count,
            is_expired: record.is_expired_at(now),
            click_history: record.click_history.clone(),
        }
    }
}
