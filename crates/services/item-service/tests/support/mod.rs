//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use common::DatabaseConfig;
use item_service_lib::infra::Database;
use item_service_lib::repository::{ItemCrudRepository, ItemStore};

/// Fresh in-memory SQLite database with all migrations applied.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn test_database() -> Arc<Database> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    Arc::new(Database::connect(&config).await.expect("sqlite connection"))
}

/// Item adapter over a fresh database.
pub async fn test_store() -> ItemStore {
    let db = test_database().await;
    ItemStore::new(ItemCrudRepository::new(db.get_connection()))
}
