//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::{ItemService, ServiceContainer, Services};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Item service
    pub item_service: Arc<dyn ItemService>,
    /// Database handle, used by the health check
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state from the wired service container.
    pub fn from_services(services: &Services, database: Arc<Database>) -> Self {
        Self {
            item_service: services.items(),
            database: Some(database),
        }
    }

    /// Create application state with a manually injected service.
    ///
    /// The health check reports no database status for such a state.
    pub fn new(item_service: Arc<dyn ItemService>) -> Self {
        Self {
            item_service,
            database: None,
        }
    }
}
