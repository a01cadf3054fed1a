//! Repository layer for data access.

mod crud;
pub mod entities;
mod item_repository;

pub use crud::{CrudStore, PrimaryKeyOf};
pub use item_repository::{ItemCrudRepository, ItemRepository, ItemStore};

#[cfg(any(test, feature = "test-utils"))]
pub use item_repository::MockItemRepository;
