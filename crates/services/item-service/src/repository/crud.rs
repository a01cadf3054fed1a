//! Generic CRUD repository over any SeaORM entity.
//!
//! `CrudStore<E>` provides the standard persistence operations for an
//! entity type and its primary key, so hand-written repositories only
//! declare the queries specific to their entity.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryOrder, Select, TryIntoModel,
};

use common::{AppError, AppResult};

/// Primary key value type of an entity.
pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// CRUD operations for entity `E`, bound to one database connection.
pub struct CrudStore<E> {
    db: DatabaseConnection,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for CrudStore<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            entity: PhantomData,
        }
    }
}

impl<E> CrudStore<E>
where
    E: EntityTrait,
    E::Model: Sync,
{
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    // =========================================================================
    // Read
    // =========================================================================

    /// Find entity by primary key
    pub async fn find_by_id(&self, id: PrimaryKeyOf<E>) -> AppResult<Option<E::Model>> {
        E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)
    }

    /// Find all entities ordered ascending by `column`
    pub async fn find_all_sorted(&self, column: E::Column) -> AppResult<Vec<E::Model>> {
        self.query(E::find().order_by_asc(column)).await
    }

    /// Run an entity-specific query
    pub async fn query(&self, select: Select<E>) -> AppResult<Vec<E::Model>> {
        select.all(&self.db).await.map_err(AppError::from)
    }

    /// Check whether a row with this primary key exists
    pub async fn exists_by_id(&self, id: PrimaryKeyOf<E>) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Count all entities
    pub async fn count(&self) -> AppResult<u64> {
        E::find().count(&self.db).await.map_err(AppError::from)
    }

    // =========================================================================
    // Write
    // =========================================================================

    /// Insert when the primary key is unset, update otherwise.
    ///
    /// Updating a row that does not exist yields `AppError::NotFound`.
    pub async fn save<A>(&self, model: A) -> AppResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + TryIntoModel<E::Model> + Send + 'static,
        E::Model: IntoActiveModel<A>,
    {
        let saved = model.save(&self.db).await.map_err(missing_row_as_not_found)?;
        saved.try_into_model().map_err(AppError::from)
    }

    /// Update existing entity
    pub async fn update<A>(&self, model: A) -> AppResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
        E::Model: IntoActiveModel<A>,
    {
        model
            .update(&self.db)
            .await
            .map_err(missing_row_as_not_found)
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Delete entity by primary key, returning the number of removed rows
    pub async fn delete_by_id(&self, id: PrimaryKeyOf<E>) -> AppResult<u64> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

fn missing_row_as_not_found(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => AppError::NotFound,
        other => AppError::from(other),
    }
}
