//! Migration: Create the item table.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut id = ColumnDef::new(Item::Id);

        // SQLite only auto-increments an INTEGER PRIMARY KEY, which is already 64-bit
        match manager.get_database_backend() {
            DatabaseBackend::Sqlite => id.integer(),
            _ => id.big_integer(),
        };

        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(id.not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Item::ItemName).string().not_null())
                    .col(ColumnDef::new(Item::Price).integer().null())
                    .col(ColumnDef::new(Item::Quantity).integer().null())
                    .to_owned(),
            )
            .await?;

        // Name lookups back the search endpoint
        manager
            .create_index(
                Index::create()
                    .name("idx_item_item_name")
                    .table(Item::Table)
                    .col(Item::ItemName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Item {
    Table,
    Id,
    ItemName,
    Price,
    Quantity,
}
