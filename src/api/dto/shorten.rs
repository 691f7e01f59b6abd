//! DTOs for link shortening endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::application::services::CreateLink;
use crate::domain::entities::UrlRecord;
use crate::error::AppError;

/// Compiled regex for custom shortcode validation.
static CUSTOM_SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("static regex is valid"));

/// Ten years, the longest validity accepted over HTTP.
const MAX_VALIDITY_MINUTES: i64 = 10 * 365 * 24 * 60;
const MIN_VALIDITY_MINUTES: i64 = -MAX_VALIDITY_MINUTES;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct UrlCreate {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional custom shortcode (3-20 alphanumeric characters).
    #[validate(length(
        min = 3,
        max = 20,
        message = "Custom shortcode must be between 3 and 20 characters"
    ))]
    #[validate(regex(
        path = *CUSTOM_SHORTCODE_REGEX,
        message = "Custom shortcode must contain only alphanumeric characters"
    ))]
    pub custom_shortcode: Option<String>,

    /// Minutes until the link stops redirecting (default: 30).
    /// Zero or negative values create an already-expired link.
    #[validate(range(min = MIN_VALIDITY_MINUTES, max = MAX_VALIDITY_MINUTES))]
    pub validity_minutes: Option<i64>,
}

/// Runs the field validators, then hands the request to the service.
impl TryFrom<UrlCreate> for CreateLink {
    type Error = AppError;

    fn try_from(item: UrlCreate) -> Result<Self, Self::Error> {
        item.validate()?;

        Ok(Self {
            original_url: item.original_url,
            custom_shortcode: item.custom_shortcode,
            validity_minutes: item.validity_minutes,
        })
    }
}

/// A created (or deduplicated) short URL.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub shortcode: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
}

impl From<UrlRecord> for UrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.shortcode.clone(),
            original_url: record.original_url,
            short_url: record.short_url,
            shortcode: record.shortcode,
            created_at: record.created_at,
            expires_at: record.expires_at,
            click_count: record.click_count,
        }
    }
}
