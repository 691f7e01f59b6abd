//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ClickEvent;

/// Individual click event information.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl From<ClickEvent> for ClickInfo {
    fn from(click: ClickEvent) -> Self {
        Self {
            timestamp: click.timestamp,
            ip_address: click.ip_address,
            user_agent: click.user_agent,
        }
    }
}
