//! Item repository contract and its SeaORM-backed adapter.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

use super::crud::CrudStore;
use super::entities::item::{self, ActiveModel, Entity as ItemEntity, Model};
use common::{AppResult, OptionExt};
use domain::{Item, ItemId, ItemSearch, ItemUpdate};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Generic CRUD repository bound to the item entity.
pub type ItemCrudRepository = CrudStore<ItemEntity>;

impl CrudStore<ItemEntity> {
    /// Items whose name contains `item_name` (case-insensitive, literal
    /// text) and whose price is at most `max_price`. Either filter may be
    /// omitted.
    pub async fn find_by_name_and_max_price(
        &self,
        item_name: Option<&str>,
        max_price: Option<i32>,
    ) -> AppResult<Vec<Model>> {
        let mut condition = Condition::all();
        if let Some(name) = item_name {
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(item::Column::ItemName)))
                    .like(LikeExpr::new(contains_pattern(name)).escape(LIKE_ESCAPE)),
            );
        }
        if let Some(max_price) = max_price {
            condition = condition.add(item::Column::Price.lte(max_price));
        }

        self.query(
            ItemEntity::find()
                .filter(condition)
                .order_by_asc(item::Column::Id),
        )
        .await
    }
}

const LIKE_ESCAPE: char = '\\';

/// Lowercased `%term%` pattern with LIKE wildcards in `term` escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Item repository trait for dependency injection.
///
/// Lookups report a missing row as `Ok(None)`; store failures are passed
/// through untouched.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item (no id) or overwrite the stored one (id set)
    async fn save(&self, item: Item) -> AppResult<Item>;

    /// Replace the mutable fields of an existing item
    async fn update(&self, id: ItemId, update: ItemUpdate) -> AppResult<Item>;

    /// Find item by ID
    async fn find_by_id(&self, id: ItemId) -> AppResult<Option<Item>>;

    /// List all items, ordered by ID
    async fn find_all(&self) -> AppResult<Vec<Item>>;

    /// List items matching the search filters, ordered by ID
    async fn find_matching(&self, search: &ItemSearch) -> AppResult<Vec<Item>>;

    /// Check whether an item exists
    async fn exists_by_id(&self, id: ItemId) -> AppResult<bool>;

    /// Delete item by ID, returning whether a row was removed
    async fn delete_by_id(&self, id: ItemId) -> AppResult<bool>;

    /// Count stored items
    async fn count(&self) -> AppResult<u64>;
}

/// Adapter implementing `ItemRepository` on top of the CRUD repository.
pub struct ItemStore {
    crud: ItemCrudRepository,
}

impl ItemStore {
    /// Create new repository instance
    pub fn new(crud: ItemCrudRepository) -> Self {
        Self { crud }
    }
}

#[async_trait]
impl ItemRepository for ItemStore {
    async fn save(&self, item: Item) -> AppResult<Item> {
        let model = self.crud.save(ActiveModel::from(item)).await?;
        tracing::debug!(item_id = model.id, "Item saved");
        Ok(Item::from(model))
    }

    async fn update(&self, id: ItemId, update: ItemUpdate) -> AppResult<Item> {
        let model = self.crud.find_by_id(id).await?.ok_or_not_found()?;

        let mut active: ActiveModel = model.into();
        active.apply(update);

        let model = self.crud.update(active).await?;
        tracing::debug!(item_id = id, "Item updated");
        Ok(Item::from(model))
    }

    async fn find_by_id(&self, id: ItemId) -> AppResult<Option<Item>> {
        let result = self.crud.find_by_id(id).await?;
        Ok(result.map(Item::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Item>> {
        let models = self.crud.find_all_sorted(item::Column::Id).await?;
        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn find_matching(&self, search: &ItemSearch) -> AppResult<Vec<Item>> {
        if search.is_empty() {
            return self.find_all().await;
        }

        let models = self
            .crud
            .find_by_name_and_max_price(search.name_filter(), search.max_price)
            .await?;
        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn exists_by_id(&self, id: ItemId) -> AppResult<bool> {
        self.crud.exists_by_id(id).await
    }

    async fn delete_by_id(&self, id: ItemId) -> AppResult<bool> {
        let removed = self.crud.delete_by_id(id).await?;
        Ok(removed > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        self.crud.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("Book"), "%book%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(contains_pattern("a_b\\c"), "%a\\_b\\\\c%");
    }
}
