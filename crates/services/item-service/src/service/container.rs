//! Service Container - wires repositories and services at startup.
//!
//! Every component is built exactly once and shared through `Arc`, so the
//! whole process sees a single repository and a single service instance.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{ItemManager, ItemService};
use crate::repository::{ItemCrudRepository, ItemRepository, ItemStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get the item repository
    fn items_repository(&self) -> Arc<dyn ItemRepository>;

    /// Get the item service
    fn items(&self) -> Arc<dyn ItemService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    item_repository: Arc<dyn ItemRepository>,
    item_service: Arc<dyn ItemService>,
}

impl Services {
    /// Create a service container from already constructed components
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        item_service: Arc<dyn ItemService>,
    ) -> Self {
        Self {
            item_repository,
            item_service,
        }
    }

    /// Create service container from a database connection.
    ///
    /// The CRUD repository is wrapped by the item adapter, and the service is
    /// built over that same adapter instance.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let crud = ItemCrudRepository::new(db);
        let item_repository: Arc<dyn ItemRepository> = Arc::new(ItemStore::new(crud));
        let item_service: Arc<dyn ItemService> =
            Arc::new(ItemManager::new(item_repository.clone()));

        tracing::debug!("Service container initialized");

        Self {
            item_repository,
            item_service,
        }
    }
}

impl ServiceContainer for Services {
    fn items_repository(&self) -> Arc<dyn ItemRepository> {
        self.item_repository.clone()
    }

    fn items(&self) -> Arc<dyn ItemService> {
        self.item_service.clone()
    }
}
