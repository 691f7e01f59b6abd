//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::Registry;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<Registry>>,
    /// Fixed base for short URLs; derived from each request when `None`.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<Registry>>, base_url: Option<String>) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
