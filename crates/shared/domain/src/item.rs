//! Item domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_ITEM_NAME_LENGTH, MIN_PRICE, MIN_QUANTITY};
use crate::error::{DomainError, DomainResult};

/// Store-assigned item identifier.
pub type ItemId = i64;

/// Item domain entity
///
/// `id` stays `None` until the item has been persisted; the store assigns it
/// on the first insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique item identifier (absent before the first save)
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<i64>, example = 1))]
    pub id: Option<ItemId>,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "book"))]
    pub item_name: String,
    /// Unit price
    #[serde(default)]
    pub price: Option<i32>,
    /// Units in stock
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl Item {
    /// Create a new, not yet persisted item
    pub fn new(item_name: impl Into<String>, price: Option<i32>, quantity: Option<i32>) -> Self {
        Self {
            id: None,
            item_name: item_name.into(),
            price,
            quantity,
        }
    }

    /// Attach an identifier (used when rebuilding persisted items)
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    /// Check if the item has never been saved
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Check business rules before the item is written.
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.item_name, self.price, self.quantity)
    }
}

/// Full replacement of an item's mutable fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    pub item_name: String,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl ItemUpdate {
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.item_name, self.price, self.quantity)
    }
}

/// Item search filters.
///
/// A blank `item_name` is treated the same as no name filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSearch {
    /// Substring the item name must contain
    pub item_name: Option<String>,
    /// Inclusive upper bound on price
    pub max_price: Option<i32>,
}

impl ItemSearch {
    pub fn new(item_name: Option<String>, max_price: Option<i32>) -> Self {
        Self {
            item_name,
            max_price,
        }
    }

    /// Name filter, if it carries any non-whitespace text
    pub fn name_filter(&self) -> Option<&str> {
        self.item_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Check if no filter is active
    pub fn is_empty(&self) -> bool {
        self.name_filter().is_none() && self.max_price.is_none()
    }
}

fn validate_fields(item_name: &str, price: Option<i32>, quantity: Option<i32>) -> DomainResult<()> {
    if item_name.trim().chars().count() < MIN_ITEM_NAME_LENGTH {
        return Err(DomainError::validation("Item name cannot be blank"));
    }
    if price.is_some_and(|p| p < MIN_PRICE) {
        return Err(DomainError::validation("Price cannot be negative"));
    }
    if quantity.is_some_and(|q| q < MIN_QUANTITY) {
        return Err(DomainError::validation("Quantity cannot be negative"));
    }
    Ok(())
}
