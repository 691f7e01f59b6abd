//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::entities::UrlStats;

/// Statistics for a single short link, including its full click history.
#[derive(Debug, Serialize)]
pub struct UrlStatsResponse {
    pub shortcode: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
    pub is_expired: bool,
    pub click_history: Vec<ClickInfo>,
}

impl From<UrlStats> for UrlStatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            shortcode: stats.shortcode,
            original_url: stats.original_url,
            short_url: stats.short_url,
            created_at: stats.created_at,
            expires_at: stats.expires_at,
            click_count: stats.click_count,
            is_expired: stats.is_expired,
            click_history: stats.click_history.into_iter().map(ClickInfo::from).collect(),
        }
    }
}

/// Every stored link, expired ones included.
#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub urls: Vec<UrlStatsResponse>,
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
