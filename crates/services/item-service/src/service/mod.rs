//! Application services layer - Use cases and business logic.
//!
//! Services depend on repository traits, not implementations. The container
//! wires concrete implementations together once at startup.

pub mod container;
mod item_service;

pub use container::{ServiceContainer, Services};
pub use item_service::{ItemManager, ItemService};

#[cfg(any(test, feature = "test-utils"))]
pub use item_service::MockItemService;
