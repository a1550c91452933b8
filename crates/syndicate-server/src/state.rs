//! Application state.

use std::sync::Arc;

use crate::service::MenuService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    service: Arc<MenuService>,
}

impl AppState {
    pub fn new(service: MenuService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns the syndication service.
    pub fn service(&self) -> &MenuService {
        &self.service
    }
}
