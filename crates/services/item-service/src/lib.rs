//! Item Service Library
//!
//! Layered CRUD service for items: a generic SeaORM CRUD repository, the
//! `ItemStore` adapter implementing the item repository contract, the item
//! service on top of it, and an Axum HTTP API.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::ItemServiceConfig;
use crate::infra::Database;
use crate::service::Services;

/// Boxed error returned by the startup entry points.
pub type StartupError = Box<dyn std::error::Error + Send + Sync>;

/// Wire the application: connect, migrate, and build the service container.
///
/// Fails if the database cannot be reached or migrated; there is no degraded
/// mode without a repository.
pub async fn bootstrap(config: &ItemServiceConfig) -> Result<(Arc<Database>, Services), StartupError> {
    let db = Arc::new(Database::connect(&config.database).await?);
    let services = Services::from_connection(db.get_connection());
    Ok((db, services))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ItemServiceConfig) -> Result<(), StartupError> {
    info!("Starting {}...", config.server.service_name);

    let (db, services) = bootstrap(&config).await?;
    let app = create_router(AppState::from_services(&services, db));

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Item service listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &ItemServiceConfig,
    action: MigrateAction,
) -> Result<(), StartupError> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
