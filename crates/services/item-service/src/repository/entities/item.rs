//! Item database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use domain::{Item, ItemUpdate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub item_name: String,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Item {
            id: Some(model.id),
            item_name: model.item_name,
            price: model.price,
            quantity: model.quantity,
        }
    }
}

/// Convert a domain item into an active model ready for `save`.
///
/// A missing id leaves the primary key `NotSet`, which makes SeaORM insert.
impl From<Item> for ActiveModel {
    fn from(item: Item) -> Self {
        ActiveModel {
            id: match item.id {
                Some(id) => Set(id),
                None => ActiveValue::NotSet,
            },
            item_name: Set(item.item_name),
            price: Set(item.price),
            quantity: Set(item.quantity),
        }
    }
}

impl ActiveModel {
    /// Overwrite every mutable column with the values of `update`
    pub fn apply(&mut self, update: ItemUpdate) {
        self.item_name = Set(update.item_name);
        self.price = Set(update.price);
        self.quantity = Set(update.quantity);
    }
}
