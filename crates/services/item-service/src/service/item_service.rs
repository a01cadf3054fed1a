//! Item service - Handles item-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::repository::ItemRepository;
use common::{AppError, AppResult};
use domain::{Item, ItemId, ItemSearch, ItemUpdate};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Item service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Validate and persist an item (insert or overwrite)
    async fn save(&self, item: Item) -> AppResult<Item>;

    /// Validate and apply an update to an existing item
    async fn update(&self, id: ItemId, update: ItemUpdate) -> AppResult<Item>;

    /// Get item by ID, `None` when it does not exist
    async fn find_by_id(&self, id: ItemId) -> AppResult<Option<Item>>;

    /// List items matching the search filters
    async fn find_items(&self, search: &ItemSearch) -> AppResult<Vec<Item>>;

    /// Delete item by ID
    async fn delete(&self, id: ItemId) -> AppResult<()>;
}

/// Concrete implementation of ItemService.
pub struct ItemManager {
    repository: Arc<dyn ItemRepository>,
}

impl ItemManager {
    /// Create new item service instance
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ItemService for ItemManager {
    async fn save(&self, item: Item) -> AppResult<Item> {
        item.validate()?;
        let saved = self.repository.save(item).await?;
        tracing::info!(item_id = ?saved.id, "Item saved");
        Ok(saved)
    }

    async fn update(&self, id: ItemId, update: ItemUpdate) -> AppResult<Item> {
        update.validate()?;
        self.repository.update(id, update).await
    }

    async fn find_by_id(&self, id: ItemId) -> AppResult<Option<Item>> {
        self.repository.find_by_id(id).await
    }

    async fn find_items(&self, search: &ItemSearch) -> AppResult<Vec<Item>> {
        self.repository.find_matching(search).await
    }

    async fn delete(&self, id: ItemId) -> AppResult<()> {
        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!(item_id = id, "Item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use mockall::predicate::eq;

    fn book() -> Item {
        Item::new("book", Some(10000), Some(10))
    }

    #[tokio::test]
    async fn save_delegates_valid_item() {
        let mut repo = MockItemRepository::new();
        repo.expect_save()
            .withf(|item| item.is_new() && item.item_name == "book")
            .times(1)
            .returning(|item| Ok(item.with_id(1)));

        let service = ItemManager::new(Arc::new(repo));
        let saved = service.save(book()).await.unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(saved.price, Some(10000));
    }

    #[tokio::test]
    async fn save_rejects_invalid_item_without_touching_repository() {
        let mut repo = MockItemRepository::new();
        repo.expect_save().never();

        let service = ItemManager::new(Arc::new(repo));
        let result = service.save(Item::new("", Some(100), None)).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn update_rejects_negative_quantity() {
        let mut repo = MockItemRepository::new();
        repo.expect_update().never();

        let service = ItemManager::new(Arc::new(repo));
        let update = ItemUpdate {
            item_name: "book".to_string(),
            price: Some(100),
            quantity: Some(-1),
        };

        assert!(matches!(
            service.update(1, update).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_passes_through_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_update()
            .with(eq(42), mockall::predicate::always())
            .returning(|_, _| Err(AppError::NotFound));

        let service = ItemManager::new(Arc::new(repo));
        let update = ItemUpdate {
            item_name: "pen".to_string(),
            price: None,
            quantity: None,
        };

        assert!(matches!(
            service.update(42, update).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn find_by_id_returns_absence_instead_of_error() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_by_id()
            .with(eq(99))
            .returning(|_| Ok(None));

        let service = ItemManager::new(Arc::new(repo));
        assert_eq!(service.find_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_items_forwards_search() {
        let mut repo = MockItemRepository::new();
        repo.expect_find_matching()
            .withf(|search| search.max_price == Some(5000))
            .returning(|_| Ok(vec![Item::new("pen", Some(1000), None).with_id(2)]));

        let service = ItemManager::new(Arc::new(repo));
        let items = service
            .find_items(&ItemSearch::new(None, Some(5000)))
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, Some(2));
    }

    #[tokio::test]
    async fn delete_missing_item_is_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete_by_id().returning(|_| Ok(false));

        let service = ItemManager::new(Arc::new(repo));
        assert!(matches!(service.delete(7).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn delete_existing_item() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete_by_id()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(true));

        let service = ItemManager::new(Arc::new(repo));
        assert!(service.delete(7).await.is_ok());
    }
}
